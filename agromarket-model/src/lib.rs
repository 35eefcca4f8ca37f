//! Product and user model for the AgroMarket catalog.
//!
//! Defines the records every other crate operates on:
//! - [`ProductRecord`] — a normalized catalog entry (id, pricing, stock, timestamps)
//! - [`ProductDraft`] / [`ProductPatch`] — creation input and merge-style updates
//! - [`ProductDetails`] — kind-specific payload (fruit, vegetable, grain)
//! - [`User`] — a [`Person`] plus a [`Role`] (farmer or buyer)
//!
//! Normalization is permissive: malformed numbers become `0`, unknown
//! categories and priorities fall back to their defaults. The only inputs
//! that are rejected are empty names, empty locations and malformed emails.

mod details;
mod error;
mod lenient;
mod product;
mod user;

pub use details::{ItemInfo, ProductDetails, ProductKind};
pub use error::{ModelError, ModelResult};
pub use lenient::normalize_amount;
pub use product::{ProductDraft, ProductPatch, ProductRecord, DEFAULT_UNIT};
pub use user::{Order, Person, Role, User};
