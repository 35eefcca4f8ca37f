use crate::details::{ItemInfo, ProductDetails, ProductKind};
use crate::error::{ModelError, ModelResult};
use crate::lenient::{self, normalize_amount};
use agromarket_types::{Category, Priority, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit label applied when none is given.
pub const DEFAULT_UNIT: &str = "kg";

fn default_name() -> String {
    lenient::UNNAMED.to_string()
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

fn default_active() -> bool {
    true
}

/// A normalized catalog entry.
///
/// Fields are private so the invariants hold for every instance: `price` and
/// `stock` are finite and non-negative, `name` is non-empty, and `id` and
/// `created_at` never change after creation. Persisted records are read
/// permissively (see the crate docs); the serialized keys are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    id: ProductId,
    #[serde(default = "default_name", deserialize_with = "lenient::name")]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "lenient::category")]
    category: Category,
    #[serde(default, deserialize_with = "lenient::priority")]
    priority: Priority,
    #[serde(default, deserialize_with = "lenient::amount")]
    price: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    stock: f64,
    #[serde(default = "default_unit")]
    unit: String,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<ProductDetails>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ProductRecord {
    /// Builds a new active record from a draft.
    ///
    /// Applies the catalog defaults (category `fruit`, priority `medium`,
    /// unit `kg`) and clamps numeric input. When the draft carries kind
    /// details, the category follows the details.
    pub fn from_draft(draft: ProductDraft, id: ProductId, now: DateTime<Utc>) -> ModelResult<Self> {
        let name = required_name(&draft.name)?;
        let location = draft.location.as_deref().map(required_location).transpose()?;
        let category = draft
            .details
            .as_ref()
            .map_or(draft.category, ProductDetails::category);

        Ok(Self {
            id,
            name,
            description: draft.description.unwrap_or_default().trim().to_string(),
            category,
            priority: draft.priority,
            price: normalize_amount(draft.price),
            stock: normalize_amount(draft.stock),
            unit: unit_or_default(draft.unit),
            active: true,
            location,
            details: draft.details,
            created_at: now,
            updated_at: None,
        })
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn stock(&self) -> f64 {
        self.stock
    }

    /// Stock valued at the current price.
    #[must_use]
    pub fn stock_value(&self) -> f64 {
        self.price * self.stock
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub const fn details(&self) -> Option<&ProductDetails> {
        self.details.as_ref()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `None` until the first successful mutation.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    #[must_use]
    pub fn kind(&self) -> ProductKind {
        self.details
            .as_ref()
            .map_or(ProductKind::Unclassified, ProductDetails::kind)
    }

    /// Summary view with the kind-specific attributes expanded.
    #[must_use]
    pub fn info(&self) -> ItemInfo {
        ItemInfo {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind(),
            category: self.category,
            location: self.location.clone(),
            active: self.active,
            attributes: self
                .details
                .as_ref()
                .map(ProductDetails::attributes)
                .unwrap_or_default(),
        }
    }

    /// Merges a patch into the record and stamps `updated_at`.
    ///
    /// Validation runs before any field is written, so a rejected patch
    /// leaves the record untouched.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) -> ModelResult<()> {
        let name = patch.name.as_deref().map(required_name).transpose()?;
        let location = patch.location.as_deref().map(required_location).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(price) = patch.price {
            self.price = normalize_amount(price);
        }
        if let Some(stock) = patch.stock {
            self.stock = normalize_amount(stock);
        }
        if patch.unit.is_some() {
            self.unit = unit_or_default(patch.unit);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if location.is_some() {
            self.location = location;
        }
        if let Some(details) = patch.details {
            self.category = details.category();
            self.details = Some(details);
        } else if self
            .details
            .as_ref()
            .is_some_and(|d| d.category() != self.category)
        {
            // Recategorized away from its kind.
            self.details = None;
        }

        self.updated_at = Some(now);
        Ok(())
    }

    /// Flips availability and stamps `updated_at`.
    pub fn toggle_active(&mut self, now: DateTime<Utc>) {
        self.active = !self.active;
        self.updated_at = Some(now);
    }

    /// Sets availability. Returns `false` (and leaves the record untouched)
    /// when it is already in the requested state.
    pub fn set_active(&mut self, active: bool, now: DateTime<Utc>) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        self.updated_at = Some(now);
        true
    }
}

fn required_name(raw: &str) -> ModelResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn required_location(raw: &str) -> ModelResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyLocation);
    }
    Ok(trimmed.to_string())
}

fn unit_or_default(unit: Option<String>) -> String {
    match unit.as_deref().map(str::trim) {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => default_unit(),
    }
}

/// Input for creating a product.
///
/// Deserializes permissively from form-shaped JSON: prices may arrive as
/// text, unknown categories fall back to the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::category")]
    pub category: Category,
    #[serde(default, deserialize_with = "lenient::priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub stock: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

impl ProductDraft {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_stock(mut self, stock: f64) -> Self {
        self.stock = stock;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: ProductDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Partial update. Present fields overwrite, absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::category_opt")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "lenient::priority_opt")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "lenient::amount_opt")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount_opt")]
    pub stock: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

impl ProductPatch {
    /// True when applying the patch would change nothing but `updated_at`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
