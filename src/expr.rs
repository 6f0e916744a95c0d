//! Expression algebra.
//!
//! This module provides:
//! - The closed [`Expr`] tree every interpreter matches exhaustively
//! - Operator definitions with their SQL tokens
//! - SQL function nodes with canonical names and constructor-enforced arities
//! - The phantom-typed [`TypedExpr`] construction surface

pub mod function;
pub mod node;
pub mod operator;
pub mod typed;

pub use function::FunctionCall;
pub use node::Expr;
pub use operator::{BinaryOp, NaryOp};
pub use typed::{
    and_all, case_when, exists, lit, or_all, timestamp, CaseBuilder, SqlNum, SqlOrd, SqlType,
    Timestamp, TypedExpr,
};
