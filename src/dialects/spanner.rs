use std::fmt::{self, Write};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::callbacks::ClauseConfig;
use crate::db::Db;
use crate::error::{Result, SpanRsError};
use crate::statement::Statement;
use crate::traits::{DatabaseDriver, Dialect, Migrator};
use crate::types::{DataType, Expr, Field, SqlValue};

/// Driver name the dialect opens DSNs through unless told otherwise.
pub const DEFAULT_DRIVER_NAME: &str = "spanner";

const SAVE_POINT_UNSUPPORTED: &str = "spanner does not support save point";

/// Cloud Spanner (GoogleSQL) dialect.
///
/// # Example
/// ```ignore
/// let db = Db::open(SpannerDialect::open("projects/p/instances/i/databases/d"), &drivers).await?;
/// ```
#[derive(Clone)]
pub struct SpannerDialect {
    driver_name: String,
    dsn: String,
    conn: Option<Arc<dyn DatabaseDriver>>,
}

impl SpannerDialect {
    /// Dialect that opens `dsn` through the registered driver on initialization.
    /// The DSN is not inspected here.
    pub fn open(dsn: impl Into<String>) -> Self {
        Self {
            driver_name: DEFAULT_DRIVER_NAME.to_string(),
            dsn: dsn.into(),
            conn: None,
        }
    }

    /// Dialect that installs an already established connection.
    pub fn with_conn(conn: Arc<dyn DatabaseDriver>) -> Self {
        Self {
            driver_name: DEFAULT_DRIVER_NAME.to_string(),
            dsn: String::new(),
            conn: Some(conn),
        }
    }

    /// Open through a driver registered under a different name.
    pub fn with_driver_name(mut self, name: impl Into<String>) -> Self {
        self.driver_name = name.into();
        self
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }
}

impl fmt::Debug for SpannerDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpannerDialect")
            .field("driver_name", &self.driver_name)
            .field("dsn", &self.dsn)
            .field("conn", &self.conn.is_some())
            .finish()
    }
}

#[async_trait]
impl Dialect for SpannerDialect {
    fn name(&self) -> &'static str {
        "spanner"
    }

    async fn initialize(&self, db: &mut Db) -> Result<()> {
        db.callbacks_mut().register_defaults(ClauseConfig::SPANNER);

        let conn = match &self.conn {
            Some(conn) => {
                debug!("installing injected spanner connection");
                Arc::clone(conn)
            }
            None => {
                debug!(driver = %self.driver_name, "opening spanner connection");
                db.drivers().open(&self.driver_name, &self.dsn).await?
            }
        };
        db.set_conn_pool(conn);
        Ok(())
    }

    fn migrator(&self, _db: &Db) -> Box<dyn Migrator> {
        panic!("spanner driver does not support migrator now.")
    }

    fn data_type_of(&self, field: &Field) -> String {
        match &field.data_type {
            DataType::Bool => "boolean".to_string(),
            DataType::Int | DataType::Uint => "INT64".to_string(),
            DataType::Float => "FLOAT64".to_string(),
            DataType::String => "STRING".to_string(),
            DataType::Time => "TIMESTAMP".to_string(),
            DataType::Bytes => "BYTES".to_string(),
            other => other.as_str().to_string(),
        }
    }

    fn default_value_of(&self, _field: &Field) -> Expr {
        Expr::new("DEFAULT")
    }

    fn bind_var_to(
        &self,
        writer: &mut dyn Write,
        stmt: &Statement,
        _value: &SqlValue,
    ) -> fmt::Result {
        write!(writer, "@v{}", stmt.vars.len())
    }

    // Segments are not escaped; an embedded backtick ends the quoted name.
    fn quote_to(&self, writer: &mut dyn Write, identifier: &str) -> fmt::Result {
        for (i, segment) in identifier.split('.').enumerate() {
            if i > 0 {
                writer.write_char('.')?;
            }
            writer.write_char('`')?;
            writer.write_str(segment)?;
            writer.write_char('`')?;
        }
        Ok(())
    }

    fn explain(&self, sql: &str, _vars: &[SqlValue]) -> String {
        sql.to_string()
    }

    fn save_point(&self, _tx: &Db, _name: &str) -> Result<()> {
        Err(SpanRsError::Unsupported(SAVE_POINT_UNSUPPORTED))
    }

    fn rollback_to(&self, _tx: &Db, _name: &str) -> Result<()> {
        Err(SpanRsError::Unsupported(SAVE_POINT_UNSUPPORTED))
    }
}
