//!
//! The in-memory store.
//!

use std::collections::BTreeMap;

use crate::settings::value::Value;

use super::Store;

///
/// The in-memory store.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    /// The groups by name.
    groups: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    ///
    /// Whether the group is present.
    ///
    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    ///
    /// The names of the present groups, sorted.
    ///
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn value(&self, group: &str, key: &str) -> Option<Value> {
        self.groups.get(group)?.get(key).cloned()
    }

    fn set_value(&mut self, group: &str, key: &str, value: Value) {
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
    }

    fn remove_group(&mut self, group: &str) {
        self.groups.remove(group);
    }
}
