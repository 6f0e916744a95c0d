//! SQL function nodes.
//!
//! Each function stores its canonical lowercase name, used verbatim by the
//! emitter. Functions never evaluate in memory; they always defer to the
//! database. Fixed arities are enforced by constructor signatures, variadic
//! constructors take a `(first, rest)` pair so an empty argument list is
//! unrepresentable.

use crate::expr::node::Expr;
use crate::expr::typed::{SqlNum, SqlOrd, SqlType, Timestamp, TypedExpr};

/// A SQL function call with its canonical name and arguments
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: &'static str,
    pub args: Vec<Expr>,
}

impl FunctionCall {
    fn new(name: &'static str, args: Vec<Expr>) -> Self {
        Self { name, args }
    }
}

fn call<T>(name: &'static str, args: Vec<Expr>) -> TypedExpr<T> {
    TypedExpr::from_node(Expr::Function(FunctionCall::new(name, args)))
}

// Aggregates

/// `count(expr)`
pub fn count<T: SqlType>(arg: TypedExpr<T>) -> TypedExpr<i64> {
    call("count", vec![arg.into_node()])
}

/// `count(*)`
pub fn count_all() -> TypedExpr<i64> {
    call("count", vec![])
}

pub fn sum<T: SqlNum>(arg: TypedExpr<T>) -> TypedExpr<T> {
    call("sum", vec![arg.into_node()])
}

pub fn avg<T: SqlNum>(arg: TypedExpr<T>) -> TypedExpr<f64> {
    call("avg", vec![arg.into_node()])
}

pub fn min<T: SqlOrd>(arg: TypedExpr<T>) -> TypedExpr<T> {
    call("min", vec![arg.into_node()])
}

pub fn max<T: SqlOrd>(arg: TypedExpr<T>) -> TypedExpr<T> {
    call("max", vec![arg.into_node()])
}

// Numeric

pub fn abs<T: SqlNum>(arg: TypedExpr<T>) -> TypedExpr<T> {
    call("abs", vec![arg.into_node()])
}

pub fn ceil(arg: TypedExpr<f64>) -> TypedExpr<f64> {
    call("ceil", vec![arg.into_node()])
}

pub fn floor(arg: TypedExpr<f64>) -> TypedExpr<f64> {
    call("floor", vec![arg.into_node()])
}

pub fn round(arg: TypedExpr<f64>) -> TypedExpr<f64> {
    call("round", vec![arg.into_node()])
}

// String

pub fn upper(arg: TypedExpr<String>) -> TypedExpr<String> {
    call("upper", vec![arg.into_node()])
}

pub fn lower(arg: TypedExpr<String>) -> TypedExpr<String> {
    call("lower", vec![arg.into_node()])
}

pub fn length(arg: TypedExpr<String>) -> TypedExpr<i64> {
    call("length", vec![arg.into_node()])
}

pub fn trim(arg: TypedExpr<String>) -> TypedExpr<String> {
    call("trim", vec![arg.into_node()])
}

/// `substr(text, start, length)`: exactly three arguments
pub fn substr(
    text: TypedExpr<String>,
    start: TypedExpr<i64>,
    len: TypedExpr<i64>,
) -> TypedExpr<String> {
    call(
        "substr",
        vec![text.into_node(), start.into_node(), len.into_node()],
    )
}

// Date/time

pub fn hour(arg: TypedExpr<Timestamp>) -> TypedExpr<i64> {
    call("hour", vec![arg.into_node()])
}

pub fn minute(arg: TypedExpr<Timestamp>) -> TypedExpr<i64> {
    call("minute", vec![arg.into_node()])
}

pub fn day(arg: TypedExpr<Timestamp>) -> TypedExpr<i64> {
    call("day", vec![arg.into_node()])
}

pub fn month(arg: TypedExpr<Timestamp>) -> TypedExpr<i64> {
    call("month", vec![arg.into_node()])
}

pub fn year(arg: TypedExpr<Timestamp>) -> TypedExpr<i64> {
    call("year", vec![arg.into_node()])
}

// Conditional

/// `coalesce(first, rest...)`: at least one argument by construction
pub fn coalesce<T: SqlType>(
    first: TypedExpr<T>,
    rest: Vec<TypedExpr<T>>,
) -> TypedExpr<T> {
    let mut args = vec![first.into_node()];
    args.extend(rest.into_iter().map(TypedExpr::into_node));
    call("coalesce", args)
}

pub fn nullif<T: SqlType>(a: TypedExpr<T>, b: TypedExpr<T>) -> TypedExpr<T> {
    call("nullif", vec![a.into_node(), b.into_node()])
}

pub fn ifnull<T: SqlType>(a: TypedExpr<T>, b: TypedExpr<T>) -> TypedExpr<T> {
    call("ifnull", vec![a.into_node(), b.into_node()])
}
