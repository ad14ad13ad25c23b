//! No-op store for platforms without local storage.

use crate::{Store, StoreError};

/// Store that accepts every write and never returns data.
///
/// Clients on platforms with no durable storage run against this
/// backend: the cart lives purely in memory and every session starts
/// empty, while the calling code stays identical to the durable path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl Store for NoopStore {
    fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }

    fn set_raw(&self, _key: &str, _bytes: &[u8]) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn exists(&self, _key: &str) -> Result<bool, StoreError> {
        Ok(false)
    }
}
