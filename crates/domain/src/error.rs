//! Domain error types.

use store::StoreError;
use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The requested entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The input was rejected before anything was written.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DomainError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Field-level input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A count field is zero or negative.
    #[error("{field} must be at least 1, got {value}")]
    NotPositive { field: &'static str, value: i32 },

    /// A price is negative, NaN, or infinite.
    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidPrice { field: &'static str, value: f64 },

    /// A timestamp could not be parsed.
    #[error("Invalid date '{input}': expected an ISO-8601 date or date-time")]
    InvalidDate { input: String },
}
