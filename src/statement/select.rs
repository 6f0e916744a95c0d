use std::collections::BTreeSet;

use crate::clause::{Direction, FromClause, GroupBy, JoinKind, Limit, OrderBy, Projection};
use crate::error::StatementError;
use crate::expr::typed::{SqlOrd, TypedExpr};
use crate::expr::Expr;
use crate::schema::TableRef;

/// Assembled select statement
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub distinct: bool,
    pub projection: Projection,
    pub from: FromClause,
    pub filter: Option<Expr>,
    pub group_by: Option<GroupBy>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl SelectStatement {
    pub fn builder(table: TableRef) -> SelectBuilder {
        SelectBuilder {
            distinct: false,
            projection: Projection::all(),
            from: FromClause::new(table),
            filter: None,
            group_by: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        self.from.collect_tables(out);
        self.projection.collect_tables(out);
        if let Some(filter) = &self.filter {
            filter.collect_tables(out);
        }
        if let Some(group_by) = &self.group_by {
            group_by.collect_tables(out);
        }
        if let Some(order_by) = &self.order_by {
            order_by.collect_tables(out);
        }
    }

    pub fn referenced_tables(&self) -> BTreeSet<TableRef> {
        let mut out = BTreeSet::new();
        self.collect_tables(&mut out);
        out
    }
}

/// Builder for [`SelectStatement`]; invariants are checked in [`SelectBuilder::build`]
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    distinct: bool,
    projection: Projection,
    from: FromClause,
    filter: Option<Expr>,
    group_by: Option<GroupBy>,
    order_by: Vec<(Expr, Direction)>,
    limit: Option<Limit>,
}

impl SelectBuilder {
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn join(
        mut self,
        kind: JoinKind,
        table: TableRef,
        on: Option<TypedExpr<bool>>,
    ) -> Self {
        self.from = self.from.join(kind, table, on.map(TypedExpr::into_node));
        self
    }

    /// Attach the where predicate; a second call replaces the first
    pub fn filter(mut self, predicate: TypedExpr<bool>) -> Self {
        self.filter = Some(predicate.into_node());
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    pub fn order_by<T: SqlOrd>(mut self, expr: TypedExpr<T>, direction: Direction) -> Self {
        self.order_by.push((expr.into_node(), direction));
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate shape invariants and assemble. Every table an attached
    /// expression reads from must appear in the from/join clauses.
    pub fn build(self) -> Result<SelectStatement, StatementError> {
        let mut declared = BTreeSet::new();
        declared.insert(self.from.table);
        for join in &self.from.joins {
            declared.insert(join.table);
        }

        let mut referenced = BTreeSet::new();
        self.projection
            .items
            .iter()
            .for_each(|item| {
                if let crate::clause::SelectItem::Expr { expr, .. } = item {
                    expr.collect_outer_tables(&mut referenced);
                }
            });
        for join in &self.from.joins {
            if let Some(on) = &join.on {
                on.collect_outer_tables(&mut referenced);
            }
        }
        if let Some(filter) = &self.filter {
            filter.collect_outer_tables(&mut referenced);
        }
        if let Some(group_by) = &self.group_by {
            for expr in &group_by.exprs {
                expr.collect_outer_tables(&mut referenced);
            }
            if let Some(having) = &group_by.having {
                having.collect_outer_tables(&mut referenced);
            }
        }
        for (expr, _) in &self.order_by {
            expr.collect_outer_tables(&mut referenced);
        }

        if let Some(table) = referenced.difference(&declared).next() {
            return Err(StatementError::UnknownTable { table: *table });
        }

        Ok(SelectStatement {
            distinct: self.distinct,
            projection: self.projection,
            from: self.from,
            filter: self.filter,
            group_by: self.group_by,
            order_by: if self.order_by.is_empty() {
                None
            } else {
                Some(OrderBy::new(self.order_by))
            },
            limit: self.limit,
        })
    }
}
