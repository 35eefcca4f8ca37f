//! Error types for the model layer.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Input rejected by record or user normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Name was empty after trimming.
    #[error("name is required")]
    EmptyName,

    /// Location was provided but empty after trimming.
    #[error("location cannot be empty")]
    EmptyLocation,

    /// Email failed format validation.
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Operation is only valid for a different role.
    #[error("operation requires a {expected} account")]
    RoleMismatch { expected: &'static str },
}
