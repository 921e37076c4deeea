use thiserror::Error;

/// Error type for spanrs operations
#[derive(Debug, Error)]
pub enum SpanRsError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("sql: unknown driver {0:?} (forgotten register?)")]
    DriverNotFound(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("No connection pool installed; the dialect was never initialized")]
    NotInitialized,

    #[error("{0}")]
    Unsupported(&'static str),

    #[error("{0} without a WHERE clause is not allowed")]
    MissingWhereClause(&'static str),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Failed to render SQL")]
    Render(#[from] std::fmt::Error),
}

/// Result type alias for spanrs operations
pub type Result<T> = std::result::Result<T, SpanRsError>;
