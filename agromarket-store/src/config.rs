use serde::{Deserialize, Serialize};

/// Default ceiling on catalog size.
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Default name under which the catalog is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "agroMarketItems";

/// Configuration for a [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Creation fails once the catalog holds this many records.
    pub max_items: usize,
    /// Name of the persisted collection (file stem for JSON persistence).
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
