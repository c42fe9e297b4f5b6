use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// String key-value persistence shared between widgets.
///
/// Receivers are `&self` so one store can sit behind an `Arc` and serve every
/// widget in the application.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if nothing was ever written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0']);
        if invalid {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        // Write next to the target and rename so readers never see a partial value
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "[]").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[]"));
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get_item("searchLocalStorageKey").unwrap(), None);
    }

    #[test]
    fn file_store_replaces_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested")).unwrap();
        store.set_item("searchLocalStorageKey", "[1,2,3]").unwrap();
        store.set_item("searchLocalStorageKey", "[]").unwrap();
        assert_eq!(
            store.get_item("searchLocalStorageKey").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("nested/searchLocalStorageKey.json").exists());
        assert!(!dir.path().join("nested/searchLocalStorageKey.json.tmp").exists());
    }

    #[test]
    fn file_store_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.remove_item("nothing").unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.set_item(key, "[]"),
                Err(Error::InvalidKey(_))
            ));
        }
    }
}
