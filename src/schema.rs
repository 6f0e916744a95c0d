//! Narrow interface to the entity-mapping layer.
//!
//! The algebra never performs reflection or schema migration; it only needs to
//! know which persistent record types (tables) exist, what their columns are
//! called, and what logical type each column carries. Typed [`Column`]
//! constants are the construction-time guard against ill-typed compositions.

pub mod column;
pub mod table;

pub use column::{Column, ColumnDef, ColumnRef};
pub use table::{Table, TableRef};
