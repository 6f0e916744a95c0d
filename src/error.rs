//! Construction-time error types.
//!
//! Everything here is a programmer error surfaced while *building* a tree or
//! statement; the malformed value is never returned. Evaluation-time
//! undecidability is deliberately not an error; see
//! [`crate::eval::Evaluated`].

use thiserror::Error;

use crate::schema::TableRef;

/// Errors raised while composing expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("Empty operand list for {context}")]
    EmptyOperandList { context: &'static str },

    #[error("IN requires a non-empty value list")]
    EmptyInList,
}

/// Errors raised while assembling statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("Update requires either an assignment list or a record source")]
    MissingUpdateSource,

    #[error("Update accepts an assignment list or a record source, not both")]
    ConflictingUpdateSource,

    #[error("Create index requires at least one indexed expression")]
    EmptyIndexColumns,

    #[error("Index name must not be empty")]
    EmptyIndexName,

    #[error("Expression references table {table:?} absent from the from/join clauses")]
    UnknownTable { table: TableRef },
}
