// ABOUTME: In-memory key-value backend for tests and throwaway sessions
// ABOUTME: Nothing survives the process; every operation succeeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::StorageError;
use std::collections::HashMap;

/// Process-local map of keys to values
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with raw values, handy for seeding corrupt state
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() -> Result<(), StorageError> {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("gymUnit")?, None);

        store.set("gymUnit", "kg")?;
        assert_eq!(store.get("gymUnit")?.as_deref(), Some("kg"));

        store.set("gymUnit", "lbs")?;
        assert_eq!(store.get("gymUnit")?.as_deref(), Some("lbs"));
        assert_eq!(store.len(), 1);

        store.remove("gymUnit")?;
        store.remove("gymUnit")?;
        assert!(store.is_empty());
        Ok(())
    }
}
