//! Dynamic attribute store for capabilities outside the model interface
//!
//! Concrete models embed an [`Attributes`] map and route the
//! `MLModel::attribute` / `set_attribute` hooks to it. Decorators forward
//! those hooks inward, so an attribute inserted after a chain was built is
//! still reachable from the outermost layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute, failing with `AttributeNotFound` when absent.
    pub fn get(&self, name: &str) -> Result<Value, ModelError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::attribute_not_found(name))
    }

    /// Insert or replace an attribute, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Attribute names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
