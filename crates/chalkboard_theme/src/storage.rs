//! Mode persistence backends
//!
//! The store only ever reads and writes one key, but backends are plain
//! string key-value stores so they can share a file with other settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;

use crate::error::{Result, StorageError};

/// Key under which the display mode is persisted
pub const STORAGE_KEY: &str = "theme";

/// Durable string key-value storage
pub trait ModeStorage: Send + Sync {
    /// Read a value, `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage
///
/// Clones share the same underlying map, so a caller can keep a handle
/// after moving one into a [`crate::ThemeStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Current value without going through the trait
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl ModeStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML file storage
///
/// The file is a flat table of string values. Writing preserves every other
/// key already present and creates missing parent directories.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let serialized = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(serialized.parse::<toml::Table>()?)
    }
}

impl ModeStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let table = self.load_table()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        // Keep unrelated settings; an unreadable file is replaced.
        let mut table = match self.load_table() {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!("Replacing unreadable theme storage: {}", err);
                toml::Table::new()
            }
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let serialized = toml::to_string(&table)?;
        fs::write(&self.path, serialized).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
