//! Local key-value store backed by a single JSON file.
//!
//! Used only as a cache. A missing or corrupt file reads as empty, and
//! every write replaces the whole file atomically.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::paths;

/// JSON object of string keys at a fixed path.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `${MACROLOG_HOME}/storage.json`.
    pub fn open_default() -> Self {
        Self::new(paths::storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a key. Entries that fail to decode as `T` read as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.load();
        let value = entries.remove(key)?;
        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::debug!(key, error = %err, "ignoring undecodable store entry");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut entries = self.load();
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to encode store entry {key}"))?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }

    fn load(&self) -> BTreeMap<String, Value> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt store");
            BTreeMap::new()
        })
    }

    fn save(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).context("Failed to encode store")?;
        write_atomic(&self.path, &json)
    }
}

/// Writes `content` to `path` via a sibling temp file and a rename.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("storage.json"));
        assert!(store.get::<Value>("anything").is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("nested").join("storage.json"));

        store.set("a", &json!({"x": 1})).unwrap();
        store.set("b", &"hello").unwrap();
        assert_eq!(store.get::<Value>("a"), Some(json!({"x": 1})));
        assert_eq!(store.get::<String>("b").as_deref(), Some("hello"));

        store.remove("a").unwrap();
        assert!(store.get::<Value>("a").is_none());
        assert_eq!(store.get::<String>("b").as_deref(), Some("hello"));
    }

    #[test]
    fn test_corrupt_file_reads_empty_and_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let store = LocalStore::new(&path);

        assert!(store.get::<Value>("k").is_none());
        store.set("k", &1).unwrap();
        assert_eq!(store.get::<i32>("k"), Some(1));
    }

    #[test]
    fn test_wrong_shape_reads_absent() {
        let dir = tempdir().unwrap();
        let store = LocalStore::new(dir.path().join("storage.json"));
        store.set("k", &"text").unwrap();
        assert!(store.get::<i32>("k").is_none());
    }
}
