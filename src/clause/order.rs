use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::schema::TableRef;

/// Sort direction for order-by items and index columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Ordered list of (expression, direction) sort keys
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub items: Vec<(Expr, Direction)>,
}

impl OrderBy {
    pub fn new(items: Vec<(Expr, Direction)>) -> Self {
        Self { items }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        for (expr, _) in &self.items {
            expr.collect_tables(out);
        }
    }
}
