//! In-memory expression evaluation.
//!
//! The evaluator walks the same tree the SQL emitter renders, but against one
//! already-materialized record. It is deliberately incomplete: any operator it
//! cannot decide yields the [`Evaluated::NoValue`] sentinel, which the cache
//! layer must treat as "fall back to the database." Correctness never depends
//! on the evaluator being complete.

pub mod evaluator;
pub mod outcome;

pub use evaluator::{matches_record, Evaluator};
pub use outcome::{Evaluated, Truth};
