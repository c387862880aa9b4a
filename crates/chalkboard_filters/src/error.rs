//! Filter error types

use thiserror::Error;

/// Filter catalog errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// No filter is registered under this id
    #[error("filter not found: {id:?}")]
    NotFound { id: String },

    /// Filter wobble would exceed the stroke it decorates
    #[error("filter {id:?} moves points by up to {offset}px, more than the {stroke_width}px stroke")]
    ExceedsStroke {
        id: String,
        offset: f32,
        stroke_width: f32,
    },
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
