use std::collections::BTreeSet;

use crate::expr::Expr;
use crate::schema::{ColumnRef, TableRef};

/// One `set column = expression` pair in an update
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: ColumnRef,
    pub value: Expr,
}

impl Assignment {
    pub fn new(column: ColumnRef, value: Expr) -> Self {
        Self { column, value }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        out.insert(self.column.table);
        self.value.collect_tables(out);
    }
}
