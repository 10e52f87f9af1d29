//! # Block State Bags
//!
//! The host describes a block's variant as a set of named properties
//! (growth stage, age, facing direction). [`BlockState`] mirrors that bag.
//! Missing keys are normal: a query for an absent key returns `None`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single block state property value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// Integer property (growth, age, direction index).
    Int(i32),
    /// Boolean property.
    Bool(bool),
    /// Enumerated string property.
    Str(String),
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Ordered property bag of a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockState {
    properties: BTreeMap<String, StateValue>,
}

impl BlockState {
    /// Creates an empty state bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<StateValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or replaces a property.
    pub fn set(&mut self, key: &str, value: impl Into<StateValue>) {
        self.properties.insert(key.to_string(), value.into());
    }

    /// Raw property lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.properties.get(key)
    }

    /// Integer property lookup. Non-integer values read as absent.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.properties.get(key) {
            Some(StateValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when no properties are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
