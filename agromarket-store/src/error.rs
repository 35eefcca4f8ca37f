//! Error types for the store layer.

use agromarket_model::ModelError;
use agromarket_types::{ProductId, UserId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// No user with this id.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The catalog already holds the configured maximum.
    #[error("catalog is full (max {0} products)")]
    CapacityReached(usize),

    /// Another user already registered this email.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Input rejected by the model.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
