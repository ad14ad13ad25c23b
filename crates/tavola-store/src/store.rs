//! The `Store` trait: typed reads and writes over raw byte storage.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};

/// A key-value store with automatic JSON serialization.
///
/// Backends implement the raw byte methods; the typed `get`/`set`
/// wrappers handle serialization in one place so every backend persists
/// the same JSON layout.
pub trait Store {
    /// Read the raw bytes stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write raw bytes under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Delete the value stored under `key`.
    ///
    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = store.get("tavola:cart")?;
    /// ```
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// store.set("tavola:cart", &lines)?;
    /// ```
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

/// A shared reference is itself a store, so one backend can serve
/// several owners without wrapper types.
impl<S: Store + ?Sized> Store for &S {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).set_raw(key, bytes)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }
}
