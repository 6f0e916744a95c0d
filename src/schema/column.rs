use std::marker::PhantomData;

use crate::schema::table::TableRef;
use crate::value::DataType;

/// Column descriptor as supplied by the entity-mapping layer
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub data_type: DataType,
    pub nullable: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str, data_type: DataType, nullable: bool) -> Self {
        Self {
            name,
            data_type,
            nullable,
        }
    }
}

/// Untyped, table-qualified column reference. The owning table disambiguates
/// same-named columns across joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnRef {
    pub table: TableRef,
    pub name: &'static str,
}

impl ColumnRef {
    pub const fn new(table: TableRef, name: &'static str) -> Self {
        Self { table, name }
    }

    /// `table.column` form used in emitted SQL
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table.name, self.name)
    }
}

/// Typed column constant. `T` is a phantom logical type with no runtime
/// representation; it exists only so the compiler rejects ill-typed operand
/// combinations before a tree is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column<T> {
    pub table: TableRef,
    pub name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Column<T> {
    pub const fn new(table: TableRef, name: &'static str) -> Self {
        Self {
            table,
            name,
            _marker: PhantomData,
        }
    }

    pub fn column_ref(&self) -> ColumnRef {
        ColumnRef::new(self.table, self.name)
    }
}
