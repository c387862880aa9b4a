//! Chalkboard Filters
//!
//! A fixed catalog of procedural distortion effects that give shapes and
//! text their hand-chalked look.
//!
//! - **Grain**: ambient fractal noise texture
//! - **Stroke displacement**: wobble for borders and shapes
//! - **Text displacement**: subtler wobble for glyphs
//!
//! Elements reference effects by id (`url(#chalk-stroke)`). The registry is
//! built once at startup and never changes; looking up an id that is not in
//! it is a programming error and fails with [`FilterError::NotFound`].
//!
//! ```rust
//! use chalkboard_filters::FilterRegistry;
//!
//! let registry = FilterRegistry::builtin();
//! let stroke = registry.get("chalk-stroke").unwrap();
//! assert_eq!(stroke.params.displacement_scale, 3.0);
//! assert!(registry.get("does-not-exist").is_err());
//! ```
//!
//! # Stroke budget
//!
//! A displacement filter moves each point by at most half its scale. That
//! offset must stay within the stroke width of the element it decorates, or
//! the wobble stops reading as chalk and starts breaking the shape. See
//! [`FilterDefinition::fits_stroke`] and [`distort::Outline`].

pub mod definition;
pub mod distort;
pub mod error;
pub mod noise;
pub mod registry;
pub mod svg;

pub use definition::{FilterDefinition, FilterKind, FilterParams};
pub use distort::{Outline, Point, MIN_SAMPLE_SPACING};
pub use error::{FilterError, Result};
pub use registry::{FilterRegistry, BLACKBOARD_GRAIN, CHALK_STROKE, CHALK_TEXT};
