//! Typed errors for the pitch store.

use thiserror::Error;

/// Errors from pitch persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No pitch with this id
    #[error("pitch not found: {id}")]
    NotFound { id: i64 },

    /// A field exceeded its column bound
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// Storage backend fault
    #[error("storage error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub(crate) fn database(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string().into())
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
