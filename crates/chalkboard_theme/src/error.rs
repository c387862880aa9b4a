//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when parsing theme names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Mode name is neither `dark` nor `light`
    #[error("unknown display mode: {0:?}")]
    UnknownMode(String),

    /// Color intent name is not part of the intent vocabulary
    #[error("unknown color intent: {0:?}")]
    UnknownIntent(String),
}

/// Errors raised by mode persistence backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the backing file
    #[error("failed to read theme storage: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the backing file
    #[error("failed to write theme storage: {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stored document is not a valid key-value table
    #[error("failed to parse theme storage: {0}")]
    Parse(#[from] toml::de::Error),

    /// Table could not be serialized back to disk
    #[error("failed to serialize theme storage: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Backend is not available in this session
    #[error("theme storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
