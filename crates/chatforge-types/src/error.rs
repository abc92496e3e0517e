use thiserror::Error;

/// Errors surfaced by bot, lead, and message operations.
#[derive(Debug, Error)]
pub enum BotError {
    /// A required field was missing or empty after trimming, or a numeric
    /// bound was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced bot does not exist.
    #[error("bot not found")]
    NotFound,

    /// The caller is not allowed to perform the operation.
    #[error("not authorized: {0}")]
    Unauthorized(String),

    /// The backing store was unreachable or rejected the operation.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in chatforge-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<RepositoryError> for BotError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => BotError::NotFound,
            other => BotError::Storage(other.to_string()),
        }
    }
}
