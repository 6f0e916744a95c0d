use anyhow::{bail, Result};

use crate::schema::column::ColumnDef;

/// Identity of a persistent record type. Cheap to copy and ordered so
/// referenced-type sets stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableRef {
    pub name: &'static str,
}

impl TableRef {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Column descriptors for one persistent record type, as supplied by the
/// entity-mapping layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

impl Table {
    pub fn new(name: &'static str, columns: Vec<ColumnDef>) -> Self {
        Self { name, columns }
    }

    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.name)
    }

    /// Look up a column descriptor by name
    pub fn column(&self, name: &str) -> Result<&ColumnDef> {
        match self.columns.iter().find(|c| c.name == name) {
            Some(col) => Ok(col),
            None => bail!("Unknown column {} on table {}", name, self.name),
        }
    }
}
