use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use crate::clauses::Clause;
use crate::error::Result;
use crate::traits::Dialect;
use crate::types::{Expr, SqlValue};

/// A statement under construction.
///
/// Clauses are collected by name and rendered in whatever order the
/// registered processor asks for. Every identifier and placeholder goes
/// through the dialect.
pub struct Statement {
    dialect: Arc<dyn Dialect>,
    clauses: HashMap<&'static str, Clause>,
    /// Rendered SQL, filled by [`Statement::build`].
    pub sql: String,
    /// Values bound so far, in placeholder order.
    pub vars: Vec<SqlValue>,
}

impl Statement {
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            clauses: HashMap::new(),
            sql: String::new(),
            vars: Vec::new(),
        }
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Add a clause, replacing any clause of the same name.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.insert(clause.name(), clause);
    }

    pub fn has_clause(&self, name: &str) -> bool {
        self.clauses.contains_key(name)
    }

    pub fn write_quoted(&self, writer: &mut dyn Write, identifier: &str) -> fmt::Result {
        self.dialect.quote_to(writer, identifier)
    }

    /// Write the placeholder for `value` and bind it.
    pub fn add_var(&mut self, writer: &mut dyn Write, value: SqlValue) -> fmt::Result {
        self.dialect.bind_var_to(writer, self, &value)?;
        self.vars.push(value);
        Ok(())
    }

    /// Write `expr`, binding its vars in place of each `?`.
    pub fn add_expr(&mut self, writer: &mut dyn Write, expr: &Expr) -> fmt::Result {
        let mut vars = expr.vars.iter();
        for ch in expr.sql.chars() {
            if ch == '?' {
                if let Some(value) = vars.next() {
                    self.add_var(writer, value.clone())?;
                    continue;
                }
            }
            writer.write_char(ch)?;
        }
        Ok(())
    }

    /// Render the present clauses in `names` order into [`Statement::sql`].
    /// Names without a clause, and clauses that render nothing, are skipped.
    pub fn build(&mut self, names: &[&str]) -> Result<()> {
        let clauses = std::mem::take(&mut self.clauses);
        let mut sql = String::with_capacity(256);
        let mut rendered = Ok(());
        for clause in names.iter().filter_map(|name| clauses.get(name)) {
            let mut part = String::new();
            rendered = clause.render(&mut part, self);
            if rendered.is_err() {
                break;
            }
            if part.is_empty() {
                continue;
            }
            if !sql.is_empty() {
                sql.push(' ');
            }
            sql.push_str(&part);
        }
        self.clauses = clauses;
        rendered?;
        self.sql = sql;
        Ok(())
    }
}
