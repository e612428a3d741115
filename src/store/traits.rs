//! Backend-agnostic `Storage` trait — the key→JSON contract everything
//! persists through.
//!
//! The engine is synchronous and single-writer, so the trait is too: every
//! mutation runs to completion before the caller regains control, which is
//! what makes a status change atomic from the UI's perspective.

use serde_json::Value;

use crate::error::StorageError;

/// Keys used in the storage namespace.
pub mod storage_keys {
    /// The logged-in `User` record (profile + document metadata).
    pub const USER: &str = "user";
    /// The flat step-id → status mapping for the journey checklist.
    pub const JOURNEY_STATUSES: &str = "journey_statuses";
}

/// Key→JSON storage backend.
///
/// Implementations must make `write` durable before returning; readers of
/// the same backend observe every completed write (last writer wins across
/// processes; there is no cross-process coordination).
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a key and deserialize it, treating corrupt data as absent.
///
/// This is the decode path for everything persisted by the engine: a value
/// that fails to deserialize is logged and dropped rather than surfaced as
/// an error, so stale or hand-edited state can never wedge a session.
pub fn read_lenient<T: serde::de::DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(value) = storage.read(key)? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unparseable stored value");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn read_lenient_passes_through_valid_values() {
        let storage = MemoryStorage::new();
        storage
            .write("k", &serde_json::json!({"a": 1}))
            .unwrap();
        let v: Option<serde_json::Value> = read_lenient(&storage, "k").unwrap();
        assert_eq!(v, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn read_lenient_treats_mismatched_shape_as_absent() {
        let storage = MemoryStorage::new();
        storage.write("k", &serde_json::json!("not a map")).unwrap();
        let v: Option<std::collections::BTreeMap<String, u32>> =
            read_lenient(&storage, "k").unwrap();
        assert!(v.is_none());
    }

    #[test]
    fn read_lenient_absent_key() {
        let storage = MemoryStorage::new();
        let v: Option<serde_json::Value> = read_lenient(&storage, "missing").unwrap();
        assert!(v.is_none());
    }
}
