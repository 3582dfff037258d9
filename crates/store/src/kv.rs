//! Key-value backends for user data.
//!
//! The engine needs very little from storage: get/set/remove by composite
//! key, plus enumeration of keys by prefix. The prefix scan is the one
//! capability beyond plain get/set, and it is what makes system-wide
//! review lookups possible.
//!
//! Two backends are provided:
//! - [`MemoryStore`]: ephemeral, for tests and throwaway sessions
//! - [`FileStore`]: a single JSON document on disk, persisted on every
//!   write
//!
//! Neither backend takes a cross-process lock. Single-user, single-process
//! access is assumed; concurrent writers from separate processes can lose
//! updates.

use crate::error::{Result, StoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};
use tracing::warn;

/// Minimal keyed string store.
///
/// Keys are sorted on enumeration so scans are deterministic.
pub trait KvStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys starting with `prefix`, in sorted order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().expect("store lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().expect("store lock poisoned").remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .read()
            .expect("store lock poisoned")
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }
}

/// File-backed store: one JSON object of key → raw value.
///
/// The whole document is rewritten on every mutation, which is fine at the
/// scale of one user's collections and reviews.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, creating an empty one if the file does not
    /// exist. A file that exists but does not parse is treated as empty
    /// rather than an error; its contents are replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file is malformed, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Serialize {
            key: self.path.display().to_string(),
            source,
        })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("store lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set("collection:ada", "[]").unwrap();

        assert_eq!(store.get("collection:ada").as_deref(), Some("[]"));
        assert_eq!(store.get("collection:bob"), None);

        store.remove("collection:ada").unwrap();
        assert_eq!(store.get("collection:ada"), None);
    }

    #[test]
    fn test_prefix_enumeration_is_sorted() {
        let store = MemoryStore::new();
        store.set("reviews:Twilight", "[]").unwrap();
        store.set("reviews:Gattaca", "[]").unwrap();
        store.set("collection:ada", "[]").unwrap();

        let keys = store.keys_with_prefix("reviews:");
        assert_eq!(keys, vec!["reviews:Gattaca", "reviews:Twilight"]);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("user:ada", r#"{"username":"ada"}"#).unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("user:ada").is_some());
    }

    #[test]
    fn test_file_store_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.keys_with_prefix("").is_empty());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }
}
