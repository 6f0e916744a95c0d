//! Realized-record interface consumed by the evaluator and the update builder.
//!
//! A [`Record`] is one already-materialized row: field name to value. The
//! cache layer supplies these for predicate matching, and the update builder
//! can derive its assignment list from one.

use std::collections::BTreeMap;

use crate::value::Value;

/// One materialized record's field values
pub trait Record {
    /// Look up a field by column name. `None` means the record has no such
    /// field at all; a field holding database NULL returns `Some(Value::Null)`.
    fn get(&self, column: &str) -> Option<Value>;

    /// Every field as an ordered (name, value) list
    fn fields(&self) -> Vec<(String, Value)>;
}

/// Map-backed record, the usual shape handed over by the cache layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    values: BTreeMap<String, Value>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn set_null(mut self, column: impl Into<String>) -> Self {
        self.values.insert(column.into(), Value::Null);
        self
    }
}

impl Record for ValueMap {
    fn get(&self, column: &str) -> Option<Value> {
        self.values.get(column).cloned()
    }

    fn fields(&self) -> Vec<(String, Value)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
