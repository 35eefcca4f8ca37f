//! Summary statistics over a record snapshot.

use agromarket_model::ProductRecord;
use agromarket_types::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts and totals for a collection of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    /// Always `total - active`.
    pub inactive: usize,
    /// Only categories that occur in the snapshot have an entry.
    pub by_category: BTreeMap<Category, usize>,
    /// Sum of `price * stock`.
    pub total_value: f64,
    #[serde(skip)]
    price_sum: f64,
}

impl CatalogStats {
    /// Mean unit price; `0` for an empty snapshot. Not part of the
    /// serialized form, so deserialized stats report `0`.
    #[must_use]
    pub fn average_price(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.price_sum / self.total as f64
        }
    }
}

/// Computes [`CatalogStats`] in a single pass.
pub fn aggregate<'a, I>(records: I) -> CatalogStats
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let mut stats = CatalogStats::default();

    for record in records {
        stats.total += 1;
        if record.is_active() {
            stats.active += 1;
        }
        *stats.by_category.entry(record.category()).or_default() += 1;
        stats.total_value += record.stock_value();
        stats.price_sum += record.price();
    }

    stats.inactive = stats.total - stats.active;
    stats
}
