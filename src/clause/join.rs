use std::collections::BTreeSet;

use crate::expr::Expr;
use crate::schema::TableRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Cross,
}

impl JoinKind {
    pub fn token(&self) -> &'static str {
        match self {
            JoinKind::Inner => " join ",
            JoinKind::Left => " left join ",
            JoinKind::Cross => " cross join ",
        }
    }
}

/// One joined table with its optional on-predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: TableRef,
    pub on: Option<Expr>,
}

/// From clause: the root table plus any joins
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub joins: Vec<Join>,
}

impl FromClause {
    pub fn new(table: TableRef) -> Self {
        Self {
            table,
            joins: Vec::new(),
        }
    }

    pub fn join(mut self, kind: JoinKind, table: TableRef, on: Option<Expr>) -> Self {
        self.joins.push(Join { kind, table, on });
        self
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        out.insert(self.table);
        for join in &self.joins {
            out.insert(join.table);
            if let Some(on) = &join.on {
                on.collect_tables(out);
            }
        }
    }
}
