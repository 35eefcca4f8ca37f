//! Record store for the AgroMarket catalog.
//!
//! Owns the canonical product list and hands read-only snapshots to the
//! query engine.
//!
//! # Architecture
//!
//! - [`CatalogStore`] applies create/update/toggle/delete and persists after
//!   every mutation through a [`CatalogPersistence`] port
//! - [`MemoryPersistence`] and [`JsonFilePersistence`] implement the port
//! - [`UserDirectory`] registers farmers and buyers
//! - [`system_stats`] combines catalog and directory figures

mod config;
mod directory;
mod error;
mod persistence;
mod store;

pub use config::{StoreConfig, DEFAULT_MAX_ITEMS, DEFAULT_STORAGE_KEY};
pub use directory::UserDirectory;
pub use error::{StoreError, StoreResult};
pub use persistence::{CatalogPersistence, JsonFilePersistence, MemoryPersistence};
pub use store::CatalogStore;

use agromarket_model::ProductKind;
use agromarket_query::{aggregate, CatalogStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Catalog statistics plus per-kind and user counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub catalog: CatalogStats,
    pub by_kind: BTreeMap<ProductKind, usize>,
    pub total_users: usize,
}

/// Summarizes a store and a directory together.
pub fn system_stats<P: CatalogPersistence>(store: &CatalogStore<P>, directory: &UserDirectory) -> SystemStats {
    let mut by_kind = BTreeMap::new();
    for record in store.records() {
        *by_kind.entry(record.kind()).or_default() += 1;
    }
    SystemStats {
        catalog: aggregate(store.records()),
        by_kind,
        total_users: directory.len(),
    }
}
