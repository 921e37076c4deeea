mod clause;
mod where_clause;

pub use clause::{Assignment, Clause, OrderByColumn};
pub use where_clause::{CmpOp, WhereClause};
