use std::fmt::{self, Write};

use crate::statement::Statement;
use crate::types::SqlValue;

/// Comparison operator of a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CmpOp {
    fn as_sql(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Neq => "<>",
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
        }
    }
}

/// Represents a WHERE clause condition.
/// Supports comparisons, null checks, IN lists and logical combinations.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereClause {
    /// column <op> value
    Cmp(String, CmpOp, SqlValue),
    /// column IS NULL
    IsNull(String),
    /// column IN (values)
    In(String, Vec<SqlValue>),
    /// clause AND clause
    And(Box<WhereClause>, Box<WhereClause>),
    /// clause OR clause
    Or(Box<WhereClause>, Box<WhereClause>),
}

impl WhereClause {
    pub fn eq(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Eq, value.into())
    }

    pub fn neq(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Neq, value.into())
    }

    pub fn gt(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Gt, value.into())
    }

    pub fn gte(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Gte, value.into())
    }

    pub fn lt(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Lt, value.into())
    }

    pub fn lte(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        WhereClause::Cmp(column.into(), CmpOp::Lte, value.into())
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        WhereClause::IsNull(column.into())
    }

    pub fn in_list<V: Into<SqlValue>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        WhereClause::In(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Combines this clause with another using AND
    pub fn and(self, other: WhereClause) -> Self {
        WhereClause::And(Box::new(self), Box::new(other))
    }

    /// Combines this clause with another using OR
    pub fn or(self, other: WhereClause) -> Self {
        WhereClause::Or(Box::new(self), Box::new(other))
    }

    fn is_compound(&self) -> bool {
        matches!(self, WhereClause::And(..) | WhereClause::Or(..))
    }

    /// Writes the condition, binding its values on `stmt`.
    pub fn render(&self, writer: &mut dyn Write, stmt: &mut Statement) -> fmt::Result {
        match self {
            WhereClause::Cmp(column, op, value) => {
                stmt.write_quoted(writer, column)?;
                write!(writer, " {} ", op.as_sql())?;
                stmt.add_var(writer, value.clone())
            }
            WhereClause::IsNull(column) => {
                stmt.write_quoted(writer, column)?;
                writer.write_str(" IS NULL")
            }
            WhereClause::In(column, values) => {
                stmt.write_quoted(writer, column)?;
                writer.write_str(" IN (")?;
                if values.is_empty() {
                    writer.write_str("NULL")?;
                }
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        writer.write_char(',')?;
                    }
                    stmt.add_var(writer, value.clone())?;
                }
                writer.write_char(')')
            }
            WhereClause::And(left, right) => render_pair(left, "AND", right, writer, stmt),
            WhereClause::Or(left, right) => render_pair(left, "OR", right, writer, stmt),
        }
    }
}

fn render_pair(
    left: &WhereClause,
    keyword: &str,
    right: &WhereClause,
    writer: &mut dyn Write,
    stmt: &mut Statement,
) -> fmt::Result {
    render_nested(left, writer, stmt)?;
    write!(writer, " {keyword} ")?;
    render_nested(right, writer, stmt)
}

fn render_nested(clause: &WhereClause, writer: &mut dyn Write, stmt: &mut Statement) -> fmt::Result {
    if clause.is_compound() {
        writer.write_char('(')?;
        clause.render(writer, stmt)?;
        writer.write_char(')')
    } else {
        clause.render(writer, stmt)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dialects::SpannerDialect;

    fn render(clause: &WhereClause) -> (String, Vec<SqlValue>) {
        let mut stmt = Statement::new(Arc::new(SpannerDialect::open("")));
        let mut sql = String::new();
        clause.render(&mut sql, &mut stmt).unwrap();
        (sql, stmt.vars)
    }

    #[test]
    fn test_eq_clause() {
        let (sql, params) = render(&WhereClause::eq("users.name", "John"));

        assert_eq!(sql, "`users`.`name` = @v0");
        assert_eq!(params, vec![SqlValue::Text("John".to_string())]);
    }

    #[test]
    fn test_and_clause() {
        let clause = WhereClause::eq("name", "John").and(WhereClause::gte("age", 30));
        let (sql, params) = render(&clause);

        assert_eq!(sql, "`name` = @v0 AND `age` >= @v1");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_nested_compounds_are_parenthesized() {
        let clause = WhereClause::eq("a", 1)
            .and(WhereClause::eq("b", 2).or(WhereClause::is_null("c")));
        let (sql, params) = render(&clause);

        assert_eq!(sql, "`a` = @v0 AND (`b` = @v1 OR `c` IS NULL)");
        assert_eq!(params, vec![SqlValue::Int64(1), SqlValue::Int64(2)]);
    }

    #[test]
    fn test_in_list() {
        let (sql, params) = render(&WhereClause::in_list("id", [1, 2, 3]));
        assert_eq!(sql, "`id` IN (@v0,@v1,@v2)");
        assert_eq!(params.len(), 3);

        let (sql, params) = render(&WhereClause::in_list("id", Vec::<i64>::new()));
        assert_eq!(sql, "`id` IN (NULL)");
        assert!(params.is_empty());
    }
}
