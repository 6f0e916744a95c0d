//! Statement-level clause fragments.
//!
//! Clauses are the composable pieces the statement assembler stitches into one
//! of the five statement shapes. Like expressions, every clause can enumerate
//! the record types it touches and is immutable once built.

pub mod assignment;
pub mod join;
pub mod limit;
pub mod order;
pub mod projection;

pub use assignment::Assignment;
pub use join::{FromClause, Join, JoinKind};
pub use limit::Limit;
pub use order::{Direction, OrderBy};
pub use projection::{GroupBy, Projection, SelectItem};
