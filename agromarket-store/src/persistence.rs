//! Persistence port for the catalog.
//!
//! The store never touches a storage medium directly; it loads once on open
//! and saves the full collection after each mutation.

use crate::config::StoreConfig;
use crate::error::StoreResult;
use agromarket_model::ProductRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load/save access to the persisted record collection.
pub trait CatalogPersistence {
    /// Returns the persisted records, or an empty list if nothing was saved yet.
    fn load(&self) -> StoreResult<Vec<ProductRecord>>;

    /// Replaces the persisted collection.
    fn save(&mut self, records: &[ProductRecord]) -> StoreResult<()>;
}

/// Keeps the "persisted" collection in memory (for tests and ephemeral use).
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    records: Vec<ProductRecord>,
    saves: usize,
}

impl MemoryPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an already-persisted collection.
    #[must_use]
    pub fn with_records(records: Vec<ProductRecord>) -> Self {
        Self { records, saves: 0 }
    }

    /// The last saved collection.
    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Number of successful saves.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl CatalogPersistence for MemoryPersistence {
    fn load(&self) -> StoreResult<Vec<ProductRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[ProductRecord]) -> StoreResult<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// Stores the collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `<dir>/<storage_key>.json`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>, config: &StoreConfig) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", config.storage_key)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogPersistence for JsonFilePersistence {
    fn load(&self) -> StoreResult<Vec<ProductRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No catalog file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, records: &[ProductRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = records.len(), "Catalog saved");
        Ok(())
    }
}
