//! Key-value storage backends.
//!
//! The task list persists through a minimal interface: `get` a string by
//! key, `set` a string under a key, last write wins. The production
//! backend keeps one `<key>.json` file under the application data
//! directory; tests swap in an in-memory map.

use crate::libs::data_storage::DataStorage;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key-value interface the task list persists through.
pub trait KvStore {
    /// Returns the stored value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// File-backed store, one file per key.
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Opens the store in the default application data directory.
    pub fn new() -> Self {
        Self {
            dir: DataStorage::new().root().to_path_buf(),
        }
    }

    /// Opens the store over an explicit directory instead of the platform
    /// default.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileKv {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
