use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawQueryResult, SqlValue};

/// An open connection (or pool of connections) to the database.
/// This is the slot a dialect fills during initialization.
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Execute a SQL statement with the given parameters.
    /// Parameters are referenced positionally as `@v0`, `@v1`, ...
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult>;
}
