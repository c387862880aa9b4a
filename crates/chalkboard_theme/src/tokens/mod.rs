//! Design tokens for the chalk look
//!
//! Tokens are the concrete values the resolver hands to views:
//! - Chalk colors
//! - Text decoration styles
//! - Resolved per-element style bundles
//! - Page-level colors

mod color;
mod page;
mod style;

pub use color::*;
pub use page::*;
pub use style::*;
