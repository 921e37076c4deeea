use std::sync::Arc;

use async_trait::async_trait;

use super::DatabaseDriver;
use crate::error::Result;

/// A driver that can be registered by name and opened from a DSN.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a connection described by `dsn`.
    /// The DSN is opaque to everything above the connector.
    async fn open(&self, dsn: &str) -> Result<Arc<dyn DatabaseDriver>>;
}
