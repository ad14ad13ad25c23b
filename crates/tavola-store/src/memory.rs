//! In-memory store for tests and ephemeral sessions.

use crate::{Store, StoreError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Store that keeps serialized values in a mutex-guarded map.
///
/// Values go through the same JSON layer as the durable backends, so a
/// round trip here exercises the real wire layout.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means another test panicked mid-write.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.lock().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Receipt {
        order_number: String,
        total: String,
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let store = MemoryStore::new();
        let receipt = Receipt {
            order_number: "ORD-1700000000".to_string(),
            total: "22.34".to_string(),
        };

        store.set("tavola:orders", &receipt).unwrap();
        let saved: Option<Receipt> = store.get("tavola:orders").unwrap();

        assert_eq!(saved, Some(receipt));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = MemoryStore::new();
        let saved: Option<Receipt> = store.get("tavola:orders").unwrap();
        assert!(saved.is_none());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("count", &1u32).unwrap();
        store.set("count", &2u32).unwrap();

        let saved: Option<u32> = store.get("count").unwrap();
        assert_eq!(saved, Some(2));
    }

    #[test]
    fn test_delete_and_exists() {
        let store = MemoryStore::new();
        store.set("count", &1u32).unwrap();
        assert!(store.exists("count").unwrap());

        store.delete("count").unwrap();
        assert!(!store.exists("count").unwrap());
        assert!(store.delete("count").is_ok());
    }

    #[test]
    fn test_wrong_type_is_a_serialize_error() {
        let store = MemoryStore::new();
        store.set("tavola:orders", &"just a string").unwrap();

        let result: Result<Option<Receipt>, _> = store.get("tavola:orders");
        assert!(matches!(result, Err(StoreError::SerializeError(_))));
    }
}
