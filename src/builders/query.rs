use crate::callbacks::Operation;
use crate::clauses::{Assignment, Clause, OrderByColumn, WhereClause};
use crate::db::Db;
use crate::error::{Result, SpanRsError};
use crate::statement::Statement;
use crate::types::{QueryResult, RawQueryResult};

/// Conditions and ordering collected against one table.
///
/// Finish with [`Query::find`], [`Query::update`] or [`Query::delete`]; each
/// renders through the processor registered for that operation.
pub struct Query<'a> {
    db: &'a Db,
    table: String,
    columns: Vec<String>,
    where_clause: Option<WhereClause>,
    group: Vec<String>,
    order: Vec<OrderByColumn>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(db: &'a Db, table: String) -> Self {
        Self {
            db,
            table,
            columns: Vec::new(),
            where_clause: None,
            group: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Columns to select. Selects `*` when never called.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a condition. Repeated calls are combined with AND.
    pub fn where_(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(clause),
            None => clause,
        });
        self
    }

    pub fn group(mut self, column: impl Into<String>) -> Self {
        self.group.push(column.into());
        self
    }

    pub fn order(mut self, order: OrderByColumn) -> Self {
        self.order.push(order);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Rows to skip. Only emitted together with a limit.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Statement holding the clauses shared by every operation.
    fn statement(&mut self) -> Statement {
        let mut stmt = self.db.statement();
        if let Some(condition) = self.where_clause.take() {
            stmt.add_clause(Clause::Where(condition));
        }
        if !self.order.is_empty() {
            stmt.add_clause(Clause::OrderBy(std::mem::take(&mut self.order)));
        }
        if self.limit.is_some() {
            stmt.add_clause(Clause::Limit {
                limit: self.limit,
                offset: self.offset,
            });
        }
        stmt
    }

    /// Run a SELECT through the query processor.
    pub async fn find(mut self) -> Result<QueryResult> {
        let mut stmt = self.statement();
        stmt.add_clause(Clause::Select {
            columns: std::mem::take(&mut self.columns),
        });
        stmt.add_clause(Clause::From {
            table: self.table.clone(),
        });
        if !self.group.is_empty() {
            stmt.add_clause(Clause::GroupBy(std::mem::take(&mut self.group)));
        }
        self.db.run(Operation::Query, stmt).await
    }

    /// Run an UPDATE through the update processor.
    ///
    /// Spanner rejects unconditional updates, so a WHERE clause is required.
    /// An empty assignment list does nothing.
    pub async fn update(mut self, assignments: Vec<Assignment>) -> Result<QueryResult> {
        if self.where_clause.is_none() {
            return Err(SpanRsError::MissingWhereClause("UPDATE"));
        }
        if assignments.is_empty() {
            return Ok(QueryResult::from_raw(RawQueryResult::empty()));
        }
        let mut stmt = self.statement();
        stmt.add_clause(Clause::Update {
            table: self.table.clone(),
        });
        stmt.add_clause(Clause::Set(assignments));
        self.db.run(Operation::Update, stmt).await
    }

    /// Run a DELETE through the delete processor.
    /// Requires a WHERE clause, as for [`Query::update`].
    pub async fn delete(mut self) -> Result<QueryResult> {
        if self.where_clause.is_none() {
            return Err(SpanRsError::MissingWhereClause("DELETE"));
        }
        let mut stmt = self.statement();
        stmt.add_clause(Clause::Delete);
        stmt.add_clause(Clause::From {
            table: self.table.clone(),
        });
        self.db.run(Operation::Delete, stmt).await
    }
}
