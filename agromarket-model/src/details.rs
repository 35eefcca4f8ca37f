//! Kind-specific product payloads.
//!
//! A product may carry extra attributes depending on what it is. Each kind
//! is a variant holding only its own fields; the summary view is built by
//! matching on the variant.

use agromarket_types::{Category, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extra attributes for a specific kind of product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ProductDetails {
    Fruit {
        /// Free-form sweetness grade (e.g. "high").
        sweet_level: String,
        /// Harvest season.
        season: String,
    },
    Vegetable {
        organic: bool,
        /// Unit weight label (e.g. "500g").
        weight: String,
    },
    Grain {
        /// Lot size label (e.g. "100kg").
        quantity: String,
        quality: String,
    },
}

impl ProductDetails {
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Fruit { .. } => ProductKind::Fruit,
            Self::Vegetable { .. } => ProductKind::Vegetable,
            Self::Grain { .. } => ProductKind::Grain,
        }
    }

    /// The catalog category a product with these details belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Fruit { .. } => Category::Fruit,
            Self::Vegetable { .. } => Category::Vegetable,
            Self::Grain { .. } => Category::Grain,
        }
    }

    /// Kind-specific attributes as display pairs.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<&'static str, String> {
        let mut attrs = BTreeMap::new();
        match self {
            Self::Fruit { sweet_level, season } => {
                attrs.insert("sweetLevel", sweet_level.clone());
                attrs.insert("season", season.clone());
            }
            Self::Vegetable { organic, weight } => {
                attrs.insert("organic", organic.to_string());
                attrs.insert("weight", weight.clone());
            }
            Self::Grain { quantity, quality } => {
                attrs.insert("quantity", quantity.clone());
                attrs.insert("quality", quality.clone());
            }
        }
        attrs
    }
}

/// Discriminant of [`ProductDetails`], plus a bucket for plain records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Fruit,
    Vegetable,
    Grain,
    /// No kind-specific details recorded.
    Unclassified,
}

/// Read-only summary of a product, shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    pub id: ProductId,
    pub name: String,
    pub kind: ProductKind,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<&'static str, String>,
}
