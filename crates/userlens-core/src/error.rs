//! Error types for the UserLens query layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LensError {
    /// The underlying store failed while executing a query
    /// (connectivity, query translation, timeout).
    #[error("Store error: {0}")]
    Store(String),

    /// A stored record could not be decoded into a domain model.
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },
}

pub type LensResult<T> = Result<T, LensError>;
