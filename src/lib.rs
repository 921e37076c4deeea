//! spanrs - a Cloud Spanner dialect for a clause-building SQL runtime
//!
//! The dialect decides how identifiers are quoted (`` `t`.`col` ``), how
//! placeholders are numbered (`@v0`, `@v1`, ...), which column types fields
//! map to and in which order statement clauses are emitted. Connections come
//! from a driver registered by name, or are injected directly.
//!
//! # Example
//! ```ignore
//! use spanrs::{Db, DriverRegistry, SpannerDialect, WhereClause};
//!
//! let drivers = DriverRegistry::new();
//! drivers.register("spanner", Arc::new(MySpannerConnector::default()));
//! let db = Db::open(SpannerDialect::open("projects/p/instances/i/databases/d"), &drivers).await?;
//!
//! let row = db
//!     .table("users")
//!     .select(&["id", "name"])
//!     .where_(WhereClause::eq("name", "John"))
//!     .find()
//!     .await?
//!     .single_row()?;
//!
//! let id = row.get("id")?;
//! ```

pub mod builders;
pub mod callbacks;
pub mod clauses;
pub mod dialects;
pub mod drivers;
pub mod error;
pub mod statement;
pub mod traits;
pub mod types;

mod db;

// Re-export main types for convenient access
pub use builders::Query;
pub use callbacks::{Callbacks, ClauseConfig, Operation};
pub use clauses::{Assignment, Clause, OrderByColumn, WhereClause};
pub use db::Db;
pub use dialects::SpannerDialect;
pub use drivers::DriverRegistry;
pub use error::{Result, SpanRsError};
pub use statement::Statement;
pub use traits::{Connector, DatabaseDriver, Dialect, Migrator};
pub use types::{
    DataType, Expr, Field, QueryResult, RawQueryResult, Record, Row, Schema, SqlValue,
};
