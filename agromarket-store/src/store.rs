use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::persistence::CatalogPersistence;
use agromarket_model::{ProductDraft, ProductKind, ProductPatch, ProductRecord};
use agromarket_query::{query, CatalogView, FilterCriteria};
use agromarket_types::ProductId;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The canonical, mutable product list.
///
/// Every mutation builds the next collection, saves it through the
/// persistence port and only then replaces the in-memory list, so a failed
/// save leaves the store as it was.
pub struct CatalogStore<P> {
    records: Vec<ProductRecord>,
    persistence: P,
    config: StoreConfig,
}

impl<P: CatalogPersistence> CatalogStore<P> {
    /// Loads the persisted collection.
    ///
    /// Ids must be unique: when a persisted id repeats, the first record
    /// wins and later copies are dropped with a warning.
    pub fn open(persistence: P, config: StoreConfig) -> StoreResult<Self> {
        let loaded = persistence.load()?;
        let mut seen = HashSet::with_capacity(loaded.len());
        let mut records = Vec::with_capacity(loaded.len());
        for record in loaded {
            if seen.insert(record.id()) {
                records.push(record);
            } else {
                warn!(product_id = %record.id(), name = record.name(), "Duplicate product id dropped on load");
            }
        }
        info!(
            count = records.len(),
            storage_key = %config.storage_key,
            "Catalog loaded"
        );
        Ok(Self {
            records,
            persistence,
            config,
        })
    }

    /// Read-only snapshot for the query engine.
    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Adds a new active product.
    pub fn create(&mut self, draft: ProductDraft) -> StoreResult<ProductRecord> {
        if self.records.len() >= self.config.max_items {
            warn!(max_items = self.config.max_items, "Product rejected: catalog full");
            return Err(StoreError::CapacityReached(self.config.max_items));
        }
        let record = ProductRecord::from_draft(draft, ProductId::new(), Utc::now())?;

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;

        info!(product_id = %record.id(), name = record.name(), "Product created");
        Ok(record)
    }

    /// Merges `patch` into the product and stamps `updated_at`.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> StoreResult<ProductRecord> {
        let now = Utc::now();
        let record = self.modify(id, |record| record.apply(patch, now).map_err(StoreError::from))?;
        info!(product_id = %id, "Product updated");
        Ok(record)
    }

    /// Flips availability.
    pub fn toggle_availability(&mut self, id: ProductId) -> StoreResult<ProductRecord> {
        let now = Utc::now();
        let record = self.modify(id, |record| {
            record.toggle_active(now);
            Ok(())
        })?;
        info!(product_id = %id, active = record.is_active(), "Product availability toggled");
        Ok(record)
    }

    /// Sets availability. Returns `false` without saving when the product is
    /// already in the requested state.
    pub fn set_active(&mut self, id: ProductId, active: bool) -> StoreResult<bool> {
        let current = self.find(id).ok_or(StoreError::NotFound(id))?;
        if current.is_active() == active {
            debug!(product_id = %id, active, "Availability unchanged");
            return Ok(false);
        }
        let now = Utc::now();
        self.modify(id, |record| {
            record.set_active(active, now);
            Ok(())
        })?;
        info!(product_id = %id, active, "Product availability set");
        Ok(true)
    }

    /// Removes a product and returns it.
    pub fn delete(&mut self, id: ProductId) -> StoreResult<ProductRecord> {
        let index = self.position(id)?;
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        info!(product_id = %id, "Product deleted");
        Ok(removed)
    }

    /// Drops every inactive product. Returns how many were removed.
    pub fn clear_unavailable(&mut self) -> StoreResult<usize> {
        let next: Vec<ProductRecord> = self.records.iter().filter(|r| r.is_active()).cloned().collect();
        let removed = self.records.len() - next.len();
        if removed > 0 {
            self.commit(next)?;
        }
        info!(removed, "Unavailable products cleared");
        Ok(removed)
    }

    /// Case-insensitive substring match on the name only.
    #[must_use]
    pub fn search_by_name(&self, text: &str) -> Vec<&ProductRecord> {
        let term = text.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&term))
            .collect()
    }

    #[must_use]
    pub fn items_of_kind(&self, kind: ProductKind) -> Vec<&ProductRecord> {
        self.records.iter().filter(|r| r.kind() == kind).collect()
    }

    /// Filters the current snapshot and computes its stats.
    #[must_use]
    pub fn query(&self, criteria: &FilterCriteria) -> CatalogView<'_> {
        query(&self.records, criteria)
    }

    fn position(&self, id: ProductId) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn modify(
        &mut self,
        id: ProductId,
        change: impl FnOnce(&mut ProductRecord) -> StoreResult<()>,
    ) -> StoreResult<ProductRecord> {
        let index = self.position(id)?;
        let mut next = self.records.clone();
        if let Err(e) = change(&mut next[index]) {
            warn!(product_id = %id, error = %e, "Product change rejected");
            return Err(e);
        }
        let record = next[index].clone();
        self.commit(next)?;
        Ok(record)
    }

    fn commit(&mut self, next: Vec<ProductRecord>) -> StoreResult<()> {
        self.persistence.save(&next)?;
        self.records = next;
        Ok(())
    }
}
