//! AgroMarket catalog manager.
//!
//! Usage:
//!   agromarket --data-dir ./data add "Mango" --price 3 --stock 5
//!   agromarket --data-dir ./data list --status active --search man
//!
//! The catalog is kept in `<data-dir>/<storage_key>.json`.

use agromarket_cli::{execute, load_config, Args};
use agromarket_store::{CatalogStore, JsonFilePersistence};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = load_config(args.config.as_deref(), args.max_items)?;
    let persistence = JsonFilePersistence::in_dir(&args.data_dir, &config);
    info!("Using catalog file {:?}", persistence.path());

    let mut store = CatalogStore::open(persistence, config).context("Failed to open catalog")?;
    let output = execute(args.command, &mut store)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
