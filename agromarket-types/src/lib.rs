//! Core type definitions for the AgroMarket catalog.
//!
//! This crate defines the small, storage-agnostic vocabulary shared by the
//! model, query and store crates:
//! - Product and user identifiers (UUID v7)
//! - The closed product enumerations: [`Category`], [`Priority`], [`Availability`]
//!
//! Enumerations parse strictly through [`std::str::FromStr`] and leniently
//! through `parse_or_default`, which is what record normalization uses.

mod enums;
mod ids;

pub use enums::{Availability, Category, Priority};
pub use ids::{ProductId, UserId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected input when parsing an enumeration strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `kind` names the field, e.g. `"category"`.
    #[error("unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}
