use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::error::{Result, SpanRsError};
use crate::traits::{Connector, DatabaseDriver};

/// Named connectors a runtime can open DSNs through.
///
/// Clones share the same underlying map, so a connector registered through
/// one handle is visible through every other.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    connectors: Arc<RwLock<HashMap<String, Arc<dyn Connector>>>>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `connector` under `name`, replacing any previous one.
    pub fn register(&self, name: impl Into<String>, connector: Arc<dyn Connector>) {
        self.connectors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), connector);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Connector>> {
        self.connectors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Open `dsn` through the connector registered under `name`.
    /// Connector errors are returned as-is.
    pub async fn open(&self, name: &str, dsn: &str) -> Result<Arc<dyn DatabaseDriver>> {
        let connector = self
            .get(name)
            .ok_or_else(|| SpanRsError::DriverNotFound(name.to_string()))?;
        let conn = connector.open(dsn).await?;
        info!(driver = name, "opened database connection");
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::InMemoryConnector;

    #[tokio::test]
    async fn test_open_unknown_driver() {
        let registry = DriverRegistry::new();
        match registry.open("spanner", "dsn").await {
            Err(SpanRsError::DriverNotFound(name)) => assert_eq!(name, "spanner"),
            Err(other) => panic!("Expected DriverNotFound, got {other:?}"),
            Ok(_) => panic!("Expected DriverNotFound, got a connection"),
        }
    }

    #[tokio::test]
    async fn test_clones_share_registrations() {
        let registry = DriverRegistry::new();
        let connector = Arc::new(InMemoryConnector::new());
        registry
            .clone()
            .register("spanner", Arc::clone(&connector) as Arc<dyn Connector>);

        assert!(registry.get("spanner").is_some());
        assert!(registry.open("spanner", "dsn-1").await.is_ok());
        assert_eq!(connector.opened_dsns(), vec!["dsn-1".to_string()]);
    }
}
