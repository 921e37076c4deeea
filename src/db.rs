use std::sync::Arc;

use tracing::debug;

use crate::builders::Query;
use crate::callbacks::{Callbacks, Operation};
use crate::clauses::Clause;
use crate::drivers::DriverRegistry;
use crate::error::{Result, SpanRsError};
use crate::statement::Statement;
use crate::traits::{DatabaseDriver, Dialect, Migrator};
use crate::types::{Expr, Field, QueryResult, RawQueryResult, Record, Schema};

/// Runtime a dialect is plugged into.
///
/// Holds the dialect, the processors it registered and the connection pool
/// it installed. Statements are rendered through the dialect and executed on
/// the pool.
pub struct Db {
    dialect: Arc<dyn Dialect>,
    drivers: DriverRegistry,
    callbacks: Callbacks,
    conn_pool: Option<Arc<dyn DatabaseDriver>>,
}

impl Db {
    /// Build a runtime around `dialect` and initialize it.
    ///
    /// # Example
    /// ```ignore
    /// let drivers = DriverRegistry::new();
    /// drivers.register("spanner", Arc::new(MySpannerConnector::default()));
    /// let db = Db::open(SpannerDialect::open(dsn), &drivers).await?;
    /// ```
    pub async fn open(dialect: impl Dialect + 'static, drivers: &DriverRegistry) -> Result<Self> {
        let dialect: Arc<dyn Dialect> = Arc::new(dialect);
        let mut db = Self {
            dialect: Arc::clone(&dialect),
            drivers: drivers.clone(),
            callbacks: Callbacks::default(),
            conn_pool: None,
        };
        dialect.initialize(&mut db).await?;
        Ok(db)
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn drivers(&self) -> &DriverRegistry {
        &self.drivers
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    pub fn conn_pool(&self) -> Option<&Arc<dyn DatabaseDriver>> {
        self.conn_pool.as_ref()
    }

    pub fn set_conn_pool(&mut self, conn: Arc<dyn DatabaseDriver>) {
        self.conn_pool = Some(conn);
    }

    /// A fresh statement rendered through this runtime's dialect.
    pub fn statement(&self) -> Statement {
        Statement::new(Arc::clone(&self.dialect))
    }

    /// Start building a query against `table`.
    pub fn table(&self, table: impl Into<String>) -> Query<'_> {
        Query::new(self, table.into())
    }

    /// Insert `records` into the schema's table with a single statement.
    ///
    /// Columns follow the schema's field order. Fields a record leaves unset
    /// are written as the dialect's default value.
    pub async fn create(&self, schema: &Schema, records: &[Record]) -> Result<QueryResult> {
        if records.is_empty() {
            return Ok(QueryResult::from_raw(RawQueryResult::empty()));
        }

        let rows: Vec<Vec<Expr>> = records
            .iter()
            .map(|record| {
                schema
                    .fields
                    .iter()
                    .map(|field| match record.get(&field.name) {
                        Some(value) => Expr::value(value.clone()),
                        None => self.dialect.default_value_of(field),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut stmt = self.statement();
        stmt.add_clause(Clause::Insert {
            table: schema.table.clone(),
        });
        stmt.add_clause(Clause::Values {
            columns: schema.fields.iter().map(|f| f.name.clone()).collect(),
            rows,
        });
        self.run(Operation::Create, stmt).await
    }

    /// Render `stmt` with the clauses registered for `op` and execute it.
    pub async fn run(&self, op: Operation, mut stmt: Statement) -> Result<QueryResult> {
        stmt.build(self.callbacks.clauses(op))?;
        let raw = self.exec(&stmt).await?;
        Ok(QueryResult::from_raw(raw))
    }

    /// Execute an already rendered statement on the connection pool.
    pub async fn exec(&self, stmt: &Statement) -> Result<RawQueryResult> {
        let conn = self.conn_pool.as_ref().ok_or(SpanRsError::NotInitialized)?;
        debug!(
            sql = %self.dialect.explain(&stmt.sql, &stmt.vars),
            vars = stmt.vars.len(),
            "executing statement"
        );
        conn.execute(&stmt.sql, &stmt.vars).await
    }

    pub fn data_type_of(&self, field: &Field) -> String {
        self.dialect.data_type_of(field)
    }

    pub fn migrator(&self) -> Box<dyn Migrator> {
        self.dialect.migrator(self)
    }

    pub fn save_point(&self, name: &str) -> Result<()> {
        self.dialect.save_point(self, name)
    }

    pub fn rollback_to(&self, name: &str) -> Result<()> {
        self.dialect.rollback_to(self, name)
    }
}
