//! Key/value stores
//!
//! The string-keyed, string-valued shape flags are persisted in. `MemoryStore`
//! is shared in-process state; `JsonFileStore` keeps a JSON object on disk.

use crate::{FlagsError, FlagsResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// String key/value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> FlagsResult<Option<String>>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> FlagsResult<()>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> FlagsResult<()>;

    /// Write several values. Stores that can batch should override this.
    fn set_all(&self, entries: &[(&str, String)]) -> FlagsResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.read().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FlagsResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FlagsResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FlagsResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn set_all(&self, entries: &[(&str, String)]) -> FlagsResult<()> {
        let mut map = self.entries.write();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}

/// JSON object of strings in a single file.
///
/// Every read goes to disk, so separate processes see each other's writes
/// (last writer wins). Each write goes to its own uniquely named sibling temp
/// file which then replaces the target, so concurrent writers never collide.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> FlagsResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(FlagsError::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| FlagsError::corrupt(&self.path, e))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> FlagsResult<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(|e| FlagsError::io(parent, e))?;
                parent
            }
            None => Path::new("."),
        };

        let content = serde_json::to_string_pretty(entries)?;
        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FlagsError::io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FlagsError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| FlagsError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> FlagsResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> FlagsResult<()> {
        self.set_all(&[(key, value.to_string())])
    }

    fn remove(&self, key: &str) -> FlagsResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    fn set_all(&self, entries: &[(&str, String)]) -> FlagsResult<()> {
        let mut current = self.read_all()?;
        for (key, value) in entries {
            current.insert((*key).to_string(), value.clone());
        }
        self.write_all(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap(), Some("v".to_string()));
        other.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("flags.json"));

        assert_eq!(store.get("missing").unwrap(), None);
        store
            .set_all(&[("a", "1".to_string()), ("b", "2".to_string())])
            .unwrap();
        store.set("a", "3").unwrap();

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get("a").unwrap(), Some("3".to_string()));
        assert_eq!(reopened.get("b").unwrap(), Some("2".to_string()));

        reopened.remove("b").unwrap();
        assert_eq!(store.get("b").unwrap(), None);
    }

    #[test]
    fn concurrent_file_writers_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.json");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = JsonFileStore::new(&path);
                    scope.spawn(move || {
                        for round in 0..10 {
                            store.set("writer", &format!("{i}-{round}"))?;
                        }
                        Ok::<(), FlagsError>(())
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap().unwrap();
            }
        });

        let value = JsonFileStore::new(&path).get("writer").unwrap().unwrap();
        assert!(value.ends_with("-9"), "{value}");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.path() != path)
            .collect();
        assert!(leftovers.is_empty(), "{leftovers:?}");
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("a"), Err(FlagsError::Corrupt { .. })));
    }
}
