use std::collections::BTreeSet;

use crate::clause::Limit;
use crate::error::StatementError;
use crate::expr::typed::TypedExpr;
use crate::expr::Expr;
use crate::schema::TableRef;

/// Assembled delete statement
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table: TableRef,
    pub filter: Option<Expr>,
    pub limit: Option<Limit>,
}

impl DeleteStatement {
    pub fn builder(table: TableRef) -> DeleteBuilder {
        DeleteBuilder {
            table,
            filter: None,
            limit: None,
        }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        out.insert(self.table);
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

/// Builder for [`DeleteStatement`]
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: TableRef,
    filter: Option<Expr>,
    limit: Option<Limit>,
}

impl DeleteBuilder {
    /// Attach the where predicate; absence means "all rows"
    pub fn filter(mut self, predicate: TypedExpr<bool>) -> Self {
        self.filter = Some(predicate.into_node());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<DeleteStatement, StatementError> {
        Ok(DeleteStatement {
            table: self.table,
            filter: self.filter,
            limit: self.limit,
        })
    }
}
