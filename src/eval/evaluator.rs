//! Evaluation rules for the in-memory interpreter.

use std::cmp::Ordering;

use crate::eval::outcome::{Evaluated, Truth};
use crate::expr::operator::{BinaryOp, NaryOp};
use crate::expr::Expr;
use crate::record::Record;
use crate::value::{coerce, Value};

/// Walks an expression tree against one materialized record.
///
/// Pure and re-entrant: holds only a shared reference to the record, so the
/// same tree may be evaluated concurrently against different records.
pub struct Evaluator<'a> {
    record: &'a dyn Record,
}

impl<'a> Evaluator<'a> {
    pub fn new(record: &'a dyn Record) -> Self {
        Self { record }
    }

    /// Three-valued predicate match for a `where`-shaped boolean root
    pub fn matches(&self, expr: &Expr) -> Truth {
        self.eval(expr).into()
    }

    /// Evaluate one node. Undecidability propagates as [`Evaluated::NoValue`];
    /// this function never fails.
    pub fn eval(&self, expr: &Expr) -> Evaluated {
        match expr {
            Expr::Column(col) => match self.record.get(col.name) {
                Some(value) => Evaluated::Value(value),
                None => Evaluated::no_value(format!("unknown column {}", col.qualified())),
            },

            Expr::Literal(value) => Evaluated::Value(value.clone()),

            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right),

            Expr::Nary { op, operands } => match op {
                NaryOp::And => self.eval_and(operands),
                NaryOp::Or => self.eval_or(operands),
                _ => self.eval_arithmetic(*op, operands),
            },

            Expr::Not(operand) => match self.eval(operand) {
                Evaluated::Value(Value::Boolean(b)) => Evaluated::boolean(!b),
                no_value @ Evaluated::NoValue(_) => no_value,
                Evaluated::Value(_) => Evaluated::no_value("non-boolean operand to not"),
            },

            // SQL-only node kinds: deciding them in memory would need the NULL
            // sentinel representation or a live sub-query. Deterministically
            // undecidable, never a silent wrong boolean.
            Expr::IsNull { .. } => Evaluated::no_value("unsupported in-memory operator: is null"),
            Expr::In { .. } => Evaluated::no_value("unsupported in-memory operator: in"),
            Expr::Exists(_) => Evaluated::no_value("unsupported in-memory operator: exists"),
            Expr::Case { .. } => Evaluated::no_value("unsupported in-memory operator: case"),
            Expr::Function(call) => {
                Evaluated::no_value(format!("unsupported in-memory function: {}", call.name))
            }
        }
    }

    fn eval_binary(&self, op: BinaryOp, left: &Expr, right: &Expr) -> Evaluated {
        // Pattern matching is SQL-only, regardless of operand values.
        if matches!(op, BinaryOp::Like | BinaryOp::NotLike) {
            return Evaluated::no_value("not implemented");
        }

        let left = match self.eval(left) {
            Evaluated::Value(v) => v,
            no_value => return no_value,
        };
        let right = match self.eval(right) {
            Evaluated::Value(v) => v,
            no_value => return no_value,
        };

        match op {
            BinaryOp::Eq | BinaryOp::Ne => {
                if left.is_null() || right.is_null() {
                    return Evaluated::no_value("null operand");
                }
                let equal = left == right;
                Evaluated::boolean(if op == BinaryOp::Eq { equal } else { !equal })
            }

            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
                match Self::ordering(&left, &right) {
                    Some(ordering) => Evaluated::boolean(match op {
                        BinaryOp::Lt => ordering == Ordering::Less,
                        BinaryOp::Le => ordering != Ordering::Greater,
                        BinaryOp::Gt => ordering == Ordering::Greater,
                        BinaryOp::Ge => ordering != Ordering::Less,
                        _ => unreachable!(),
                    }),
                    None => Evaluated::no_value("non-comparable operand"),
                }
            }

            BinaryOp::Like | BinaryOp::NotLike => unreachable!("handled above"),
        }
    }

    /// Ordering ladder: numeric, then text, then temporal.
    fn ordering(left: &Value, right: &Value) -> Option<Ordering> {
        if let Some(ordering) = coerce::compare(coerce::as_numeric, left, right) {
            return Some(ordering);
        }
        if let Some(ordering) = coerce::compare(coerce::as_text, left, right) {
            return Some(ordering);
        }
        coerce::compare(coerce::as_temporal, left, right)
    }

    /// Conjunction: a NoValue anywhere wins over a false, so every operand is
    /// evaluated, with no short-circuit.
    fn eval_and(&self, operands: &[Expr]) -> Evaluated {
        let mut realized = Vec::with_capacity(operands.len());
        for operand in operands {
            match self.eval(operand) {
                Evaluated::Value(v) => realized.push(v),
                no_value => return no_value,
            }
        }
        let mut result = true;
        for value in &realized {
            match value {
                Value::Boolean(b) => result = result && *b,
                _ => return Evaluated::no_value("non-boolean operand to and"),
            }
        }
        Evaluated::boolean(result)
    }

    /// Disjunction: left-to-right, a true seen before any NoValue decides the
    /// result.
    fn eval_or(&self, operands: &[Expr]) -> Evaluated {
        for operand in operands {
            match self.eval(operand) {
                Evaluated::Value(Value::Boolean(true)) => return Evaluated::boolean(true),
                Evaluated::Value(Value::Boolean(false)) => {}
                no_value @ Evaluated::NoValue(_) => return no_value,
                Evaluated::Value(_) => {
                    return Evaluated::no_value("non-boolean operand to or")
                }
            }
        }
        Evaluated::boolean(false)
    }

    fn eval_arithmetic(&self, op: NaryOp, operands: &[Expr]) -> Evaluated {
        let mut values = Vec::with_capacity(operands.len());
        for operand in operands {
            match self.eval(operand) {
                Evaluated::Value(v) => values.push(v),
                no_value => return no_value,
            }
        }

        let (first, rest) = match values.split_first() {
            Some(split) => split,
            None => return Evaluated::no_value("non-numeric operand"),
        };

        // Zero divisors are rejected before any fold executes.
        if op == NaryOp::Div && rest.iter().any(|v| coerce::as_numeric(v) == Some(0.0)) {
            return Evaluated::no_value("division by zero");
        }

        match op {
            NaryOp::Add | NaryOp::Sub | NaryOp::Mul => {
                // Integral math stays integral; a single floating operand
                // promotes the whole fold to the numeric path.
                if coerce::all(coerce::as_integral, &values) {
                    let combine = |a: i64, b: i64| match op {
                        NaryOp::Add => a.wrapping_add(b),
                        NaryOp::Sub => a.wrapping_sub(b),
                        _ => a.wrapping_mul(b),
                    };
                    match coerce::as_integral(first)
                        .and_then(|seed| coerce::fold(coerce::as_integral, rest, seed, combine))
                    {
                        Some(result) => Evaluated::Value(Value::Integer(result)),
                        None => Evaluated::no_value("non-numeric operand"),
                    }
                } else if coerce::all(coerce::as_numeric, &values) {
                    let combine = |a: f64, b: f64| match op {
                        NaryOp::Add => a + b,
                        NaryOp::Sub => a - b,
                        _ => a * b,
                    };
                    match coerce::as_numeric(first)
                        .and_then(|seed| coerce::fold(coerce::as_numeric, rest, seed, combine))
                    {
                        Some(result) => Evaluated::Value(Value::Real(result)),
                        None => Evaluated::no_value("non-numeric operand"),
                    }
                } else {
                    Evaluated::no_value("non-numeric operand")
                }
            }

            NaryOp::Div => {
                if coerce::all(coerce::as_numeric, &values) {
                    match coerce::as_numeric(first).and_then(|seed| {
                        coerce::fold(coerce::as_numeric, rest, seed, |a, b| a / b)
                    }) {
                        Some(result) => Evaluated::Value(Value::Real(result)),
                        None => Evaluated::no_value("non-numeric operand"),
                    }
                } else {
                    Evaluated::no_value("non-numeric operand")
                }
            }

            // Bitwise is integral-only: undefined on floating values, so no
            // numeric fallback.
            NaryOp::BitAnd | NaryOp::BitOr => {
                if coerce::all(coerce::as_integral, &values) {
                    let combine = |a: i64, b: i64| match op {
                        NaryOp::BitAnd => a & b,
                        _ => a | b,
                    };
                    match coerce::as_integral(first)
                        .and_then(|seed| coerce::fold(coerce::as_integral, rest, seed, combine))
                    {
                        Some(result) => Evaluated::Value(Value::Integer(result)),
                        None => Evaluated::no_value("non-numeric operand"),
                    }
                } else {
                    Evaluated::no_value("non-numeric operand")
                }
            }

            NaryOp::And | NaryOp::Or => unreachable!("handled by eval_and/eval_or"),
        }
    }
}

/// Helper to match a predicate against one record
pub fn matches_record(expr: &Expr, record: &dyn Record) -> Truth {
    Evaluator::new(record).matches(expr)
}
