use std::collections::BTreeSet;

use crate::expr::Expr;
use crate::schema::TableRef;

/// One projected item in a select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `*`
    AllColumns,
    /// An expression, optionally aliased
    Expr {
        expr: Expr,
        alias: Option<&'static str>,
    },
}

/// Select projection list
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub items: Vec<SelectItem>,
}

impl Projection {
    /// `select *`
    pub fn all() -> Self {
        Self {
            items: vec![SelectItem::AllColumns],
        }
    }

    pub fn new(items: Vec<SelectItem>) -> Self {
        Self { items }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        for item in &self.items {
            if let SelectItem::Expr { expr, .. } = item {
                expr.collect_tables(out);
            }
        }
    }
}

/// Group-by clause with an optional having predicate
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub exprs: Vec<Expr>,
    pub having: Option<Expr>,
}

impl GroupBy {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Self {
            exprs,
            having: None,
        }
    }

    pub fn with_having(mut self, having: Expr) -> Self {
        self.having = Some(having);
        self
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        for expr in &self.exprs {
            expr.collect_tables(out);
        }
        if let Some(having) = &self.having {
            having.collect_tables(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lit;
    use crate::schema::{Column, TableRef};

    #[test]
    fn test_projection_collects_expression_tables() {
        let age: Column<i64> = Column::new(TableRef::new("people"), "age");
        let projection = Projection::new(vec![
            SelectItem::AllColumns,
            SelectItem::Expr {
                expr: age.expr().add(lit(1)).into_node(),
                alias: Some("next_age"),
            },
        ]);

        let mut tables = BTreeSet::new();
        projection.collect_tables(&mut tables);
        assert_eq!(tables.len(), 1);
        assert!(tables.contains(&TableRef::new("people")));
    }
}
