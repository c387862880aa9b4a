//! Application error types

use std::path::PathBuf;

use chalkboard_filters::FilterError;
use thiserror::Error;

/// Showcase errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read the config file
    #[error("failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unexpected fields
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A chalked element references a missing or oversized filter
    #[error("element {element:?}: {source}")]
    Element {
        element: String,
        #[source]
        source: FilterError,
    },

    /// Filter lookup failed
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Result type for showcase operations
pub type Result<T> = std::result::Result<T, AppError>;
