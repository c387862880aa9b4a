//! Application configuration
//!
//! ```toml
//! log_filter = "info"
//!
//! [theme]
//! storage = "file"
//! path = "chalkboard-state.toml"
//! ```

use std::fs;
use std::path::Path;

use chalkboard_theme::ThemeConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
