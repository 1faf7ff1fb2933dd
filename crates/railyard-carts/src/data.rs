//! Persistent per-entity key-value data.
//!
//! The host saves and restores [`EntityData`] with the entity; anything
//! written here survives reloads and is visible on every side.

use std::collections::BTreeMap;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// A single stored value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

/// Persistent data blob attached to an entity.
#[derive(Component, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityData {
    entries: BTreeMap<String, DataValue>,
}

impl EntityData {
    /// Creates an empty blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a value of any type is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.entries.get(key)
    }

    /// Returns the string stored under `key`, or `None` if the key is
    /// missing or holds another type.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(DataValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Stores a value, replacing whatever was there.
    pub fn set(&mut self, key: impl Into<String>, value: DataValue) {
        self.entries.insert(key.into(), value);
    }

    /// Stores a string value.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, DataValue::String(value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_string() {
        let mut data = EntityData::new();
        data.set_string("owner", "alice");
        assert!(data.contains_key("owner"));
        assert_eq!(data.get_string("owner"), Some("alice"));
    }

    #[test]
    fn test_get_string_wrong_type() {
        let mut data = EntityData::new();
        data.set("speed", DataValue::Double(0.4));
        assert!(data.contains_key("speed"));
        assert_eq!(data.get_string("speed"), None);
    }

    #[test]
    fn test_overwrite() {
        let mut data = EntityData::new();
        data.set_string("k", "a");
        data.set_string("k", "b");
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("k"), Some(&DataValue::String("b".into())));
    }

    #[test]
    fn test_json_shape() {
        let mut data = EntityData::new();
        data.set_string("owner", "alice");
        data.set("linked", DataValue::Bool(true));
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"linked":true,"owner":"alice"}"#);

        let back: EntityData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
