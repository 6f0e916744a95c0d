//! Value model for the expression algebra.
//!
//! This module provides:
//!
//! - **Value**: Type-safe representation of realized column values
//! - **DataType**: Logical column types known to the schema layer
//! - **coerce**: Partial conversions used by the in-memory evaluator
//!
//! Values are what the cache layer hands the evaluator (one per record field)
//! and what the emitter collects as ordered bind parameters.

pub mod coerce;
pub mod types;

pub use types::{DataType, Value};
