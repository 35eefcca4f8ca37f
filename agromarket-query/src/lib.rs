//! Catalog query engine.
//!
//! Pure functions from a snapshot of [`ProductRecord`]s to a filtered view
//! and summary statistics:
//!
//! - [`filter`] — status, category, priority and free-text predicates, ANDed
//! - [`aggregate`] — counts, per-category breakdown and stock value
//! - [`query`] — both at once, with stats over the *unfiltered* snapshot
//!
//! Nothing here mutates its input or keeps state between calls. Results
//! borrow from the snapshot they were computed from.

mod criteria;
mod filter;
mod stats;

pub use criteria::{FilterCriteria, Selector};
pub use filter::{filter, matches};
pub use stats::{aggregate, CatalogStats};

use agromarket_model::ProductRecord;
use serde::Serialize;
use tracing::debug;

/// Filtered records plus statistics for the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a ProductRecord>,
    pub stats: CatalogStats,
}

/// Runs [`filter`] and [`aggregate`] over the same snapshot.
pub fn query<'a>(records: &'a [ProductRecord], criteria: &FilterCriteria) -> CatalogView<'a> {
    let items = filter(records, criteria);
    let stats = aggregate(records);
    debug!(
        total = stats.total,
        matched = items.len(),
        criteria = %criteria,
        "Catalog query evaluated"
    );
    CatalogView { items, stats }
}
