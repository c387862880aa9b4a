//! Chalkboard Showcase
//!
//! Wires the theme store and the filter catalog together for the page's view
//! layer. Views describe their chalked elements as [`ChalkElement`]s and ask
//! the [`Showcase`] for presentation attributes.
//!
//! # Example
//!
//! ```rust
//! use chalkboard_app::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let showcase = Showcase::new(&AppConfig::default())?;
//!
//!     let button = ChalkElement::new("hero-button", ColorIntent::AccentPrimary)
//!         .filter(CHALK_STROKE)
//!         .stroke_width(2.0);
//!
//!     let style = showcase.style(&button)?;
//!     assert!(style.class.contains("text-yellow-200"));
//!     assert_eq!(style.style, "filter: url(#chalk-stroke)");
//!
//!     showcase.toggle_mode();
//!     let style = showcase.style(&button)?;
//!     assert!(style.class.contains("decoration-yellow-200"));
//!     Ok(())
//! }
//! ```

mod app;
mod config;
pub mod content;
mod element;
mod error;


pub use app::Showcase;
pub use config::AppConfig;
pub use element::{ChalkElement, ElementStyle};
pub use error::{AppError, Result};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::Showcase;
    pub use crate::config::AppConfig;
    pub use crate::element::{ChalkElement, ElementStyle};
    pub use crate::error::{AppError, Result};

    pub use chalkboard_filters::{FilterRegistry, BLACKBOARD_GRAIN, CHALK_STROKE, CHALK_TEXT};
    pub use chalkboard_theme::{ColorIntent, Mode, StyleTokens, ThemeStore};
}
