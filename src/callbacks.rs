//! Registry of the default create/query/update/delete processors.
//!
//! A processor is nothing more than the ordered list of clause names its
//! statements are rendered with. Dialects pick the order at initialization.

use std::collections::HashMap;

/// Runtime operation a processor is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Query,
    Update,
    Delete,
}

/// Clause ordering for each default processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseConfig {
    pub create: &'static [&'static str],
    pub update: &'static [&'static str],
    pub delete: &'static [&'static str],
    pub query: &'static [&'static str],
}

impl ClauseConfig {
    /// Clause ordering accepted by Cloud Spanner.
    pub const SPANNER: ClauseConfig = ClauseConfig {
        create: &["INSERT", "VALUES"],
        update: &["UPDATE", "SET", "WHERE", "ORDER BY", "LIMIT"],
        delete: &["DELETE", "FROM", "WHERE", "ORDER BY", "LIMIT"],
        query: &["SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "LIMIT"],
    };

    fn clauses(&self, op: Operation) -> &'static [&'static str] {
        match op {
            Operation::Create => self.create,
            Operation::Query => self.query,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// A registered processor for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    pub clauses: &'static [&'static str],
}

#[derive(Debug, Default, Clone)]
pub struct Callbacks {
    processors: HashMap<Operation, Processor>,
}

impl Callbacks {
    /// Register a processor per operation using `config`'s clause order.
    /// Replaces whatever was registered before.
    pub fn register_defaults(&mut self, config: ClauseConfig) {
        for op in [
            Operation::Create,
            Operation::Query,
            Operation::Update,
            Operation::Delete,
        ] {
            self.processors.insert(
                op,
                Processor {
                    clauses: config.clauses(op),
                },
            );
        }
    }

    pub fn processor(&self, op: Operation) -> Option<&Processor> {
        self.processors.get(&op)
    }

    /// Clause names registered for `op`, empty when nothing is registered.
    pub fn clauses(&self, op: Operation) -> &'static [&'static str] {
        self.processor(op).map(|p| p.clauses).unwrap_or(&[])
    }
}
