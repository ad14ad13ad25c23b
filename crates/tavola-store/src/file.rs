//! File-backed store: one JSON file per key under a root directory.

use crate::{Store, StoreError};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Durable store that keeps each key in its own `<key>.json` file.
///
/// Key characters outside `[A-Za-z0-9._-]` are replaced with `_`, so the
/// key `tavola:cart` lands in `tavola_cart.json`. Writes go through a
/// temp file and a rename, which keeps a crash mid-write from leaving a
/// half-written value behind.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = dir.into();
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::OpenError(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Directory holding this store's files.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Filesystem path backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl Store for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("tavola:cart", &vec!["margherita", "tiramisu"]).unwrap();
        let saved: Option<Vec<String>> = store.get("tavola:cart").unwrap();

        assert_eq!(saved, Some(vec!["margherita".to_string(), "tiramisu".to_string()]));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let saved: Option<Vec<String>> = store.get("tavola:cart").unwrap();
        assert!(saved.is_none());
    }

    #[test]
    fn test_value_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("tavola:cart", &42u32).unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        let saved: Option<u32> = store.get("tavola:cart").unwrap();
        assert_eq!(saved, Some(42));
    }

    #[test]
    fn test_key_characters_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert_eq!(
            store.path_for("tavola:cart"),
            dir.path().join("tavola_cart.json")
        );
    }

    #[test]
    fn test_delete_removes_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("tavola:cart", &1u8).unwrap();
        assert!(store.exists("tavola:cart").unwrap());

        store.delete("tavola:cart").unwrap();
        assert!(!store.exists("tavola:cart").unwrap());
        let saved: Option<u8> = store.get("tavola:cart").unwrap();
        assert!(saved.is_none());
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(store.delete("tavola:cart").is_ok());
    }

    #[test]
    fn test_corrupted_file_is_a_serialize_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        fs::write(store.path_for("tavola:cart"), b"{not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = store.get("tavola:cart");
        assert!(matches!(result, Err(StoreError::SerializeError(_))));
    }
}
