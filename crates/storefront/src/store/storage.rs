//! Key-value persistence boundary for the cart store.
//!
//! The store keeps each collection as one JSON document under a fixed
//! key and rewrites the whole document on every change. The trait keeps
//! the store testable without touching the filesystem.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from the storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a document failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key-value storage for serialized store documents.
pub trait Storage: Send + Sync {
    /// Load the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be read. A missing key
    /// is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key under a data
/// directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage, used by tests and available as a no-persistence
/// fallback.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("omniworld-storage-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = temp_dir("roundtrip");
        let storage = FileStorage::new(&dir).unwrap();

        assert!(storage.load("missing").unwrap().is_none());

        storage.save("doc", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.load("doc").unwrap().as_deref(), Some(r#"{"a":1}"#));

        storage.save("doc", "[]").unwrap();
        assert_eq!(storage.load("doc").unwrap().as_deref(), Some("[]"));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load("k").unwrap().is_none());
        storage.save("k", "v").unwrap();
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("v"));
    }
}
