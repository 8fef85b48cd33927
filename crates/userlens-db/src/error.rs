//! Database-specific error types and conversions.

use userlens_core::error::LensError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record decode failed: {0}")]
    Decode(String),
}

impl From<DbError> for LensError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Decode(message) => LensError::InvalidRecord { message },
            other => LensError::Store(other.to_string()),
        }
    }
}
