//! Evaluation outcome types.

use crate::value::Value;

/// Per-node evaluation outcome. `NoValue` is an ordinary propagating value
/// meaning "cannot be determined without querying the database": never an
/// error, never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
    Value(Value),
    NoValue(String),
}

impl Evaluated {
    pub fn no_value(reason: impl Into<String>) -> Self {
        Evaluated::NoValue(reason.into())
    }

    pub fn boolean(b: bool) -> Self {
        Evaluated::Value(Value::Boolean(b))
    }

    pub fn is_no_value(&self) -> bool {
        matches!(self, Evaluated::NoValue(_))
    }
}

/// Three-valued predicate match result handed to the cache layer
#[derive(Debug, Clone, PartialEq)]
pub enum Truth {
    True,
    False,
    /// Cannot be decided in memory; the reason is diagnostic only
    Undecided(String),
}

impl Truth {
    pub fn is_true(&self) -> bool {
        matches!(self, Truth::True)
    }

    pub fn is_undecided(&self) -> bool {
        matches!(self, Truth::Undecided(_))
    }
}

impl From<Evaluated> for Truth {
    fn from(outcome: Evaluated) -> Self {
        match outcome {
            Evaluated::Value(Value::Boolean(true)) => Truth::True,
            Evaluated::Value(Value::Boolean(false)) => Truth::False,
            Evaluated::Value(_) => Truth::Undecided("non-boolean predicate".to_string()),
            Evaluated::NoValue(reason) => Truth::Undecided(reason),
        }
    }
}
