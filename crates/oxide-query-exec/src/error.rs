//! Error types for query execution.

use oxide_query_result::QueryResultError;

/// Errors that can occur while executing a query.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The query returned a number of rows the caller did not accept.
    #[error(transparent)]
    QueryResult(#[from] QueryResultError),
}

impl ExecError {
    /// Returns the cardinality error, if this is one.
    #[must_use]
    pub fn query_result(&self) -> Option<&QueryResultError> {
        match self {
            Self::QueryResult(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for query execution.
pub type Result<T> = std::result::Result<T, ExecError>;
