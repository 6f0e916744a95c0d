use std::collections::BTreeSet;

use crate::clause::Direction;
use crate::error::StatementError;
use crate::expr::typed::{SqlOrd, TypedExpr};
use crate::expr::Expr;
use crate::schema::TableRef;

/// Assembled create-index statement.
///
/// Name uniqueness within the owning table's namespace is the catalog's
/// responsibility; the builder only guarantees a non-empty name and a
/// non-empty, order-preserving column list.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStatement {
    pub name: String,
    pub table: TableRef,
    pub unique: bool,
    pub columns: Vec<(Expr, Direction)>,
}

impl CreateIndexStatement {
    pub fn builder(name: impl Into<String>, table: TableRef) -> CreateIndexBuilder {
        CreateIndexBuilder {
            name: name.into(),
            table,
            unique: false,
            columns: Vec::new(),
        }
    }

    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        out.insert(self.table);
        for (expr, _) in &self.columns {
            expr.collect_tables(out);
        }
    }
}

/// Builder for [`CreateIndexStatement`]
#[derive(Debug, Clone)]
pub struct CreateIndexBuilder {
    name: String,
    table: TableRef,
    unique: bool,
    columns: Vec<(Expr, Direction)>,
}

impl CreateIndexBuilder {
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn column<T: SqlOrd>(mut self, expr: TypedExpr<T>, direction: Direction) -> Self {
        self.columns.push((expr.into_node(), direction));
        self
    }

    pub fn build(self) -> Result<CreateIndexStatement, StatementError> {
        if self.name.is_empty() {
            return Err(StatementError::EmptyIndexName);
        }
        if self.columns.is_empty() {
            return Err(StatementError::EmptyIndexColumns);
        }
        Ok(CreateIndexStatement {
            name: self.name,
            table: self.table,
            unique: self.unique,
            columns: self.columns,
        })
    }
}

/// Assembled drop-index statement
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndexStatement {
    pub name: String,
    pub if_exists: bool,
}

impl DropIndexStatement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            if_exists: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    fn people() -> TableRef {
        TableRef::new("people")
    }

    #[test]
    fn test_create_index_preserves_column_order() {
        let age: Column<i64> = Column::new(people(), "age");
        let name: Column<String> = Column::new(people(), "name");

        let index = CreateIndexStatement::builder("people_age_name", people())
            .unique()
            .column(age.expr(), Direction::Desc)
            .column(name.expr(), Direction::Asc)
            .build()
            .unwrap();

        assert!(index.unique);
        assert_eq!(index.columns.len(), 2);
        assert_eq!(index.columns[0].1, Direction::Desc);
        assert_eq!(index.columns[1].1, Direction::Asc);
    }

    #[test]
    fn test_create_index_requires_columns_and_name() {
        let err = CreateIndexStatement::builder("idx", people())
            .build()
            .unwrap_err();
        assert_eq!(err, StatementError::EmptyIndexColumns);

        let age: Column<i64> = Column::new(people(), "age");
        let err = CreateIndexStatement::builder("", people())
            .column(age.expr(), Direction::Asc)
            .build()
            .unwrap_err();
        assert_eq!(err, StatementError::EmptyIndexName);
    }

    #[test]
    fn test_drop_index() {
        let drop = DropIndexStatement::new("people_age").if_exists();
        assert!(drop.if_exists);
        assert_eq!(drop.name, "people_age");
    }
}
