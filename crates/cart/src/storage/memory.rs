use std::collections::HashMap;

use super::{CartStorage, StorageError};

/// In-memory key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    /// Number of successful writes, for tests.
    writes: usize,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one value already present.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Successful writes since creation.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
