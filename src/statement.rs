//! Statement assembly.
//!
//! Builders compose clause fragments into one of the five statement shapes and
//! validate shape invariants at construction: a malformed statement is never
//! returned. Every statement can enumerate the record types it touches, which
//! drives downstream schema and cache-scoping decisions.

pub mod delete;
pub mod index;
pub mod select;
pub mod update;

use std::collections::BTreeSet;

use crate::schema::TableRef;

pub use delete::DeleteStatement;
pub use index::{CreateIndexStatement, DropIndexStatement};
pub use select::SelectStatement;
pub use update::{UpdateSource, UpdateStatement};

/// One of the five statement shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateIndex(CreateIndexStatement),
    DropIndex(DropIndexStatement),
}

impl Statement {
    pub fn collect_tables(&self, out: &mut BTreeSet<TableRef>) {
        match self {
            Statement::Select(s) => s.collect_tables(out),
            Statement::Update(s) => s.collect_tables(out),
            Statement::Delete(s) => s.collect_tables(out),
            Statement::CreateIndex(s) => s.collect_tables(out),
            Statement::DropIndex(_) => {}
        }
    }

    pub fn referenced_tables(&self) -> BTreeSet<TableRef> {
        let mut out = BTreeSet::new();
        self.collect_tables(&mut out);
        out
    }
}
