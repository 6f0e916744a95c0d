//! Partial value conversions used by the in-memory evaluator.
//!
//! Each conversion is a total function from an arbitrary realized value to an
//! `Option`: `None` means the value does not have the expected runtime shape.
//! Conversions never panic. Callers are expected to check [`all`] before
//! relying on [`compare`] or [`fold`] results.

use std::cmp::Ordering;

use crate::value::Value;

/// Convert to a 64-bit integer. Accepts integers only; rejects floating values.
pub fn as_integral(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        _ => None,
    }
}

/// Convert to a 64-bit float. Accepts any number-like value, widening integers.
pub fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(f) => Some(*f),
        _ => None,
    }
}

/// Convert to text.
pub fn as_text(value: &Value) -> Option<&str> {
    match value {
        Value::Text(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Convert to a temporal instant (milliseconds since the Unix epoch).
pub fn as_temporal(value: &Value) -> Option<i64> {
    match value {
        Value::Timestamp(ms) => Some(*ms),
        _ => None,
    }
}

/// True iff every value converts under the given conversion.
pub fn all<'v, T>(conv: impl Fn(&'v Value) -> Option<T>, values: &'v [Value]) -> bool {
    values.iter().all(|v| conv(v).is_some())
}

/// Convert both sides and compare. `None` if either side fails to convert or
/// the converted values are incomparable.
pub fn compare<'v, T: PartialOrd>(
    conv: impl Fn(&'v Value) -> Option<T>,
    a: &'v Value,
    b: &'v Value,
) -> Option<Ordering> {
    let a = conv(a)?;
    let b = conv(b)?;
    a.partial_cmp(&b)
}

/// Convert each value and left-fold with `combine`. `None` if any value fails
/// to convert.
pub fn fold<'v, T>(
    conv: impl Fn(&'v Value) -> Option<T>,
    values: &'v [Value],
    seed: T,
    combine: impl Fn(T, T) -> T,
) -> Option<T> {
    let mut acc = seed;
    for value in values {
        acc = combine(acc, conv(value)?);
    }
    Some(acc)
}
