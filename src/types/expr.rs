use super::SqlValue;

/// A raw SQL expression with its own bound values.
///
/// Each `?` in `sql` is replaced by the placeholder of the next entry in
/// `vars` when the expression is written into a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub sql: String,
    pub vars: Vec<SqlValue>,
}

impl Expr {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            vars: Vec::new(),
        }
    }

    /// A single bound value.
    pub fn value(value: impl Into<SqlValue>) -> Self {
        Self {
            sql: "?".to_string(),
            vars: vec![value.into()],
        }
    }

    pub fn with_vars(sql: impl Into<String>, vars: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            vars,
        }
    }
}
