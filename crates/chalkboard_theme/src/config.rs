//! Theme configuration
//!
//! Deserialized from the `[theme]` table of the app config:
//!
//! ```toml
//! [theme]
//! storage = "file"
//! path = "chalkboard-state.toml"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::{FileStorage, MemoryStorage, ModeStorage};

/// File used by the `file` backend when no path is configured
pub const DEFAULT_STATE_FILE: &str = "chalkboard-state.toml";

/// Where the display mode is persisted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost at process exit
    #[default]
    Memory,
    /// TOML key-value file
    File,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage: StorageBackend,
    pub path: Option<PathBuf>,
}

impl ThemeConfig {
    /// Path the file backend writes to
    pub fn state_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }

    /// Build the configured persistence backend
    pub fn build_storage(&self) -> Box<dyn ModeStorage> {
        match self.storage {
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
            StorageBackend::File => Box::new(FileStorage::new(self.state_path())),
        }
    }
}
