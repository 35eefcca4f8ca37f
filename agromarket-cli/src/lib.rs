//! Command definitions and execution for the `agromarket` binary.

use std::fs;
use std::path::{Path, PathBuf};

use agromarket_model::{ProductDraft, ProductPatch};
use agromarket_query::FilterCriteria;
use agromarket_store::{CatalogPersistence, CatalogStore, StoreConfig};
use agromarket_types::ProductId;
use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "agromarket")]
#[command(about = "Manage an agricultural product catalog")]
pub struct Args {
    /// Directory holding the catalog file
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON file with store configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the maximum number of products
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a product
    Add(AddArgs),
    /// Merge a JSON patch into a product
    Update {
        id: ProductId,
        /// Patch object, e.g. '{"price": 3.5}'
        patch: String,
    },
    /// Flip a product's availability
    Toggle { id: ProductId },
    /// Delete a product
    Remove { id: ProductId },
    /// Delete every unavailable product
    ClearUnavailable,
    /// List products matching the filters, with catalog stats
    List(ListArgs),
    /// Show one product with its kind-specific attributes
    Show { id: ProductId },
    /// Print catalog statistics
    Stats,
}

/// Product fields as typed in a form; numbers are accepted as text.
#[derive(ClapArgs, Debug)]
pub struct AddArgs {
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub stock: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> Result<ProductDraft> {
        let form = json!({
            "name": self.name,
            "description": self.description,
            "category": self.category,
            "priority": self.priority,
            "price": self.price,
            "stock": self.stock,
            "unit": self.unit,
            "location": self.location,
        });
        serde_json::from_value(form).context("Invalid product fields")
    }
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// all | active | inactive
    #[arg(long, default_value = "all")]
    pub status: String,
    /// all | fruit | vegetable | grain | dairy | tuber
    #[arg(long, default_value = "all")]
    pub category: String,
    /// all | high | medium | low
    #[arg(long, default_value = "all")]
    pub priority: String,
    /// Text to look for in name or description
    #[arg(long, default_value = "")]
    pub search: String,
}

impl ListArgs {
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(&self.status, &self.category, &self.priority, &self.search)
    }
}

/// Reads the optional config file and applies flag overrides.
pub fn load_config(path: Option<&Path>, max_items: Option<usize>) -> Result<StoreConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading config from {:?}", path);
            let raw = fs::read_to_string(path).context("Failed to read config file")?;
            serde_json::from_str::<StoreConfig>(&raw).context("Failed to parse config file")?
        }
        None => StoreConfig::default(),
    };
    if let Some(max_items) = max_items {
        config.max_items = max_items;
    }
    Ok(config)
}

/// Runs one command against the store and returns its JSON output.
pub fn execute<P: CatalogPersistence>(command: Command, store: &mut CatalogStore<P>) -> Result<Value> {
    debug!(?command, "Executing command");
    let output = match command {
        Command::Add(args) => {
            let record = store.create(args.into_draft()?)?;
            serde_json::to_value(record)?
        }
        Command::Update { id, patch } => {
            let patch: ProductPatch = serde_json::from_str(&patch).context("Invalid patch JSON")?;
            serde_json::to_value(store.update(id, patch)?)?
        }
        Command::Toggle { id } => serde_json::to_value(store.toggle_availability(id)?)?,
        Command::Remove { id } => serde_json::to_value(store.delete(id)?)?,
        Command::ClearUnavailable => json!({ "removed": store.clear_unavailable()? }),
        Command::List(args) => serde_json::to_value(store.query(&args.criteria()))?,
        Command::Show { id } => {
            let record = store
                .find(id)
                .with_context(|| format!("Product {id} not found"))?;
            serde_json::to_value(record.info())?
        }
        Command::Stats => serde_json::to_value(store.query(&FilterCriteria::default()).stats)?,
    };
    Ok(output)
}
