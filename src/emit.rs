//! SQL text emission.
//!
//! The emitter is the second interpreter over the tree: it renders every node
//! kind into dialect-specific SQL text while collecting bound literals into an
//! ordered parameter list. Emission keeps no state between calls; each call
//! produces a fresh [`SqlQuery`].

pub mod dialect;
pub mod emitter;

pub use dialect::{Dialect, Postgres, Sqlite};
pub use emitter::{SqlEmitter, SqlQuery};
