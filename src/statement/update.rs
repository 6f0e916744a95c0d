use std::collections::BTreeSet;

use crate::clause::Assignment;
use crate::error::StatementError;
use crate::expr::typed::{SqlType, TypedExpr};
use crate::expr::Expr;
use crate::record::Record;
use crate::schema::{Column, TableRef};
use crate::value::Value;

/// Where an update's new values come from: an explicit assignment list or the
/// fields of a materialized record. Exactly one, enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateSource {
    Assignments(Vec<Assignment>),
    Record(Vec<(String, Value)>),
}

/// Assembled update statement
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table: TableRef,
    pub source: UpdateSource,
    pub filter: Option<Expr>,
}

impl UpdateStatement {
    pub fn builder(table: TableRef) -> UpdateBuilder {
        UpdateBuilder {
            table,
            assignments: Vec::new(),
            record_fields: None,
            filter: None,
        }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        out.insert(self.table);
        if let UpdateSource::Assignments(assignments) = &self.source {
            for assignment in assignments {
                assignment.collect_tables(out);
            }
        }
        if let Some(filter) = &self.filter {
            filter.collect_tables(out);
        }
    }

    pub fn referenced_tables(&self) -> BTreeSet<TableRef> {
        let mut out = BTreeSet::new();
        self.collect_tables(&mut out);
        out
    }
}

/// Builder for [`UpdateStatement`]. No limit method exists: limit never
/// attaches to an update shape.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: TableRef,
    assignments: Vec<Assignment>,
    record_fields: Option<Vec<(String, Value)>>,
    filter: Option<Expr>,
}

impl UpdateBuilder {
    /// Add one typed `set column = expression` pair
    pub fn set<T: SqlType>(mut self, column: Column<T>, value: TypedExpr<T>) -> Self {
        self.assignments
            .push(Assignment::new(column.column_ref(), value.into_node()));
        self
    }

    /// Derive the full field/value list from a materialized record
    pub fn set_from_record(mut self, record: &dyn Record) -> Self {
        self.record_fields = Some(record.fields());
        self
    }

    /// Attach the where predicate; absence means "all rows"
    pub fn filter(mut self, predicate: TypedExpr<bool>) -> Self {
        self.filter = Some(predicate.into_node());
        self
    }

    pub fn build(self) -> Result<UpdateStatement, StatementError> {
        let source = match (self.assignments.is_empty(), self.record_fields) {
            (false, Some(_)) => return Err(StatementError::ConflictingUpdateSource),
            (true, None) => return Err(StatementError::MissingUpdateSource),
            (false, None) => UpdateSource::Assignments(self.assignments),
            (true, Some(fields)) => UpdateSource::Record(fields),
        };
        Ok(UpdateStatement {
            table: self.table,
            source,
            filter: self.filter,
        })
    }
}
