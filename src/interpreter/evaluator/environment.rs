use std::collections::{BTreeMap, HashMap};

use crate::interpreter::value::Value;

/// The runtime variable store.
///
/// One store is created per run and handed to the evaluator; there is no
/// process-wide state. Procedure scopes do not get stores of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).copied()
    }

    /// Stores a value, replacing any previous one.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Number of variables holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All assigned variables, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values.iter().map(|(name, value)| (name.clone(), *value)).collect()
    }

    /// Consumes the store, returning its contents ordered by name.
    #[must_use]
    pub fn into_snapshot(self) -> BTreeMap<String, Value> {
        self.values.into_iter().collect()
    }
}
