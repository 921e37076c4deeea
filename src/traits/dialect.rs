use std::fmt::{self, Write};

use async_trait::async_trait;

use crate::db::Db;
use crate::error::Result;
use crate::statement::Statement;
use crate::types::{Expr, Field, SqlValue};

/// The capability set a database dialect exposes to the runtime.
///
/// The runtime calls into the dialect for every identifier it quotes, every
/// placeholder it emits and every column type it needs, and calls
/// [`Dialect::initialize`] once when it is opened.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// Identifier used to look the dialect up.
    fn name(&self) -> &'static str;

    /// Register clause templates and install a connection pool on `db`.
    async fn initialize(&self, db: &mut Db) -> Result<()>;

    /// Schema migration support for this dialect.
    fn migrator(&self, db: &Db) -> Box<dyn Migrator>;

    /// Column type for a field.
    fn data_type_of(&self, field: &Field) -> String;

    /// Expression that tells the database to use the column default.
    fn default_value_of(&self, field: &Field) -> Expr;

    /// Write the placeholder for the next value bound on `stmt`.
    fn bind_var_to(&self, writer: &mut dyn Write, stmt: &Statement, value: &SqlValue)
        -> fmt::Result;

    /// Write `identifier` quoted for this dialect.
    fn quote_to(&self, writer: &mut dyn Write, identifier: &str) -> fmt::Result;

    /// Render SQL and its vars for logging.
    fn explain(&self, sql: &str, vars: &[SqlValue]) -> String;

    fn save_point(&self, tx: &Db, name: &str) -> Result<()>;

    fn rollback_to(&self, tx: &Db, name: &str) -> Result<()>;
}

/// Schema migration operations a dialect may provide.
pub trait Migrator {
    /// Create or alter `table` so that it holds `fields`.
    fn auto_migrate(&self, table: &str, fields: &[Field]) -> Result<()>;

    fn has_table(&self, table: &str) -> Result<bool>;
}
