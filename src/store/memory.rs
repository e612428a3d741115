//! In-memory storage backend — tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::StorageError;

use super::traits::Storage;

/// HashMap-backed storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("storage lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is present. Test helper.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("storage lock poisoned")
            .remove(key);
        Ok(())
    }
}
