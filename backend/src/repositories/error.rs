//! Storage error type shared by all repositories

use thiserror::Error;

/// Errors raised by the data access layer
///
/// Repositories never swallow these; callers decide what the client sees.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness or check constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be decoded
    #[error("Corrupt stored state: {0}")]
    CorruptState(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return StoreError::ConstraintViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

/// Result type alias for repository operations
pub type StoreResult<T> = Result<T, StoreError>;
