// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Insertion-ordered string key-value store

use indexmap::IndexMap;

/// Key-value mapping for one transaction scope.
///
/// Iteration follows insertion order. Overwriting a key keeps its position,
/// while unsetting and re-setting a key moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    entries: IndexMap<String, String>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove `key`, returning the previous value. Absent keys are ignored.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        // shift_remove keeps the relative order of the remaining keys
        self.entries.shift_remove(key)
    }

    /// Number of keys whose value equals `value`
    pub fn count_by_value(&self, value: &str) -> usize {
        self.entries.values().filter(|v| v.as_str() == value).count()
    }

    /// Keys whose value equals `value`, in insertion order
    pub fn find_by_value(&self, value: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Store {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}
