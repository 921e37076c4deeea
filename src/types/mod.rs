mod expr;
mod field;
mod record;
mod row;
mod sql_value;

pub use expr::Expr;
pub use field::{DataType, Field, Schema};
pub use record::Record;
pub use row::{QueryResult, RawQueryResult, Row};
pub use sql_value::SqlValue;
