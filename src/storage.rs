//! Key-value string stores backing the persistence layer.
//!
//! The splitter only ever needs one key, but the stores are general so that
//! tests can run against [`MemoryStore`] while the terminal app uses
//! [`FileStore`].

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::types::SplitError;

/// A durable (or not) map from string keys to string values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, SplitError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SplitError>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), SplitError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, SplitError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SplitError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SplitError> {
        (**self).remove(key)
    }
}

/// In-memory store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SplitError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SplitError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SplitError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SplitError> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            // Invalid UTF-8 is passed on lossily; the record parser rejects it.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored record at {:?}", path);
                Ok(None)
            }
            Err(e) => Err(SplitError::storage("read", key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SplitError::storage("create directory", key, e))?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| SplitError::storage("write", key, e))?;
        debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SplitError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SplitError::storage("delete", key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(!store.contains("k"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested").join("data"));

        assert_eq!(store.get("expenseData").unwrap(), None);
        store.set("expenseData", "{}").unwrap();
        assert!(store.path_for("expenseData").exists());
        assert_eq!(store.get("expenseData").unwrap().as_deref(), Some("{}"));

        store.remove("expenseData").unwrap();
        assert!(!store.path_for("expenseData").exists());
        store.remove("expenseData").unwrap();
    }

    #[test]
    fn test_file_store_lossy_utf8() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        std::fs::write(store.path_for("k"), [0xff, 0xfe, b'{']).unwrap();
        let value = store.get("k").unwrap().unwrap();
        assert!(value.ends_with('{'));
    }

    #[test]
    fn test_file_store_write_failure_surfaces() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the directory should be.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::new(&blocker);

        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, SplitError::Storage { .. }));
    }
}
