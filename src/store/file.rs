//! File-backed storage — a single JSON object on disk, rewritten on every
//! mutation.
//!
//! This is the engine's stand-in for browser local storage: small, flat,
//! synchronous, and readable with a text editor. A missing or corrupt file
//! degrades to an empty namespace with a logged warning.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::StorageError;

use super::traits::Storage;

/// Storage backed by one JSON file mapping keys to values.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // BTreeMap keeps the on-disk file diff-stable across writes.
    entries: Mutex<BTreeMap<String, Value>>,
}

impl FileStorage {
    /// Open (or create) storage at `path`.
    ///
    /// The parent directory is created if needed. Corrupt existing content
    /// is discarded, never an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let entries = Self::load_entries(&path);
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(path: &Path) -> BTreeMap<String, Value> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read storage file, starting empty");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt storage file, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("storage lock poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.clone());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
