use std::fmt::{self, Write};

use super::WhereClause;
use crate::statement::Statement;
use crate::types::{Expr, SqlValue};

/// `column = value` inside a SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: SqlValue,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByColumn {
    pub column: String,
    pub desc: bool,
}

impl OrderByColumn {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: false,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: true,
        }
    }
}

/// One named part of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Insert { table: String },
    Values { columns: Vec<String>, rows: Vec<Vec<Expr>> },
    Update { table: String },
    Set(Vec<Assignment>),
    Delete,
    From { table: String },
    /// An empty column list selects `*`.
    Select { columns: Vec<String> },
    Where(WhereClause),
    GroupBy(Vec<String>),
    OrderBy(Vec<OrderByColumn>),
    /// Rendered only when `limit` is set.
    Limit { limit: Option<u64>, offset: Option<u64> },
}

impl Clause {
    /// Name the clause is registered under in a processor's clause list.
    pub fn name(&self) -> &'static str {
        match self {
            Clause::Insert { .. } => "INSERT",
            Clause::Values { .. } => "VALUES",
            Clause::Update { .. } => "UPDATE",
            Clause::Set(_) => "SET",
            Clause::Delete => "DELETE",
            Clause::From { .. } => "FROM",
            Clause::Select { .. } => "SELECT",
            Clause::Where(_) => "WHERE",
            Clause::GroupBy(_) => "GROUP BY",
            Clause::OrderBy(_) => "ORDER BY",
            Clause::Limit { .. } => "LIMIT",
        }
    }

    pub fn render(&self, writer: &mut dyn Write, stmt: &mut Statement) -> fmt::Result {
        match self {
            Clause::Insert { table } => {
                writer.write_str("INSERT INTO ")?;
                stmt.write_quoted(writer, table)
            }
            Clause::Values { columns, rows } => {
                writer.write_char('(')?;
                write_quoted_list(writer, stmt, columns.iter().map(String::as_str))?;
                writer.write_str(") VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writer.write_char(',')?;
                    }
                    writer.write_char('(')?;
                    for (j, expr) in row.iter().enumerate() {
                        if j > 0 {
                            writer.write_char(',')?;
                        }
                        stmt.add_expr(writer, expr)?;
                    }
                    writer.write_char(')')?;
                }
                Ok(())
            }
            Clause::Update { table } => {
                writer.write_str("UPDATE ")?;
                stmt.write_quoted(writer, table)
            }
            Clause::Set(assignments) => {
                writer.write_str("SET ")?;
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        writer.write_char(',')?;
                    }
                    stmt.write_quoted(writer, &assignment.column)?;
                    writer.write_char('=')?;
                    stmt.add_var(writer, assignment.value.clone())?;
                }
                Ok(())
            }
            Clause::Delete => writer.write_str("DELETE"),
            Clause::From { table } => {
                writer.write_str("FROM ")?;
                stmt.write_quoted(writer, table)
            }
            Clause::Select { columns } => {
                writer.write_str("SELECT ")?;
                if columns.is_empty() {
                    return writer.write_char('*');
                }
                write_quoted_list(writer, stmt, columns.iter().map(String::as_str))
            }
            Clause::Where(condition) => {
                writer.write_str("WHERE ")?;
                condition.render(writer, stmt)
            }
            Clause::GroupBy(columns) => {
                writer.write_str("GROUP BY ")?;
                write_quoted_list(writer, stmt, columns.iter().map(String::as_str))
            }
            Clause::OrderBy(columns) => {
                writer.write_str("ORDER BY ")?;
                for (i, order) in columns.iter().enumerate() {
                    if i > 0 {
                        writer.write_char(',')?;
                    }
                    stmt.write_quoted(writer, &order.column)?;
                    if order.desc {
                        writer.write_str(" DESC")?;
                    }
                }
                Ok(())
            }
            // Spanner only accepts OFFSET after a LIMIT.
            Clause::Limit { limit, offset } => match (limit, offset) {
                (Some(limit), Some(offset)) => write!(writer, "LIMIT {limit} OFFSET {offset}"),
                (Some(limit), None) => write!(writer, "LIMIT {limit}"),
                (None, _) => Ok(()),
            },
        }
    }
}

fn write_quoted_list<'a>(
    writer: &mut dyn Write,
    stmt: &Statement,
    identifiers: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (i, identifier) in identifiers.enumerate() {
        if i > 0 {
            writer.write_char(',')?;
        }
        stmt.write_quoted(writer, identifier)?;
    }
    Ok(())
}
