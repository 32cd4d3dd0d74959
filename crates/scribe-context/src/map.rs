use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Bindings, NestedMap, Value};

/// One frame of bindings: unique string keys mapped to untyped values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMap {
    entries: HashMap<String, Value>,
}

impl ContextMap {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, replacing any previous binding in this frame.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Bind `nested_key` inside the nested map stored under `key`, creating
    /// the map (or replacing a non-map value) first.
    pub fn set_nested(
        &mut self,
        key: impl Into<String>,
        nested_key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        let slot = self
            .entries
            .entry(key.into())
            .or_insert_with(|| Value::Object(NestedMap::new()));
        if let Value::Object(map) = slot {
            map.insert(nested_key.into(), value.into());
        } else {
            let mut map = NestedMap::new();
            map.insert(nested_key.into(), value.into());
            *slot = Value::Object(map);
        }
    }

    /// Remove and return the binding for `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Number of bindings in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frame has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Bindings for ContextMap {
    fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ContextMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<NestedMap> for ContextMap {
    fn from(map: NestedMap) -> Self {
        map.into_iter().collect()
    }
}
