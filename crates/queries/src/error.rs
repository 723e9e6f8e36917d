//! Query error types.

use thiserror::Error;

/// Errors that can occur while reading.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    /// The requested entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
