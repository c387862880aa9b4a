//! Chalkboard Theme System
//!
//! Display mode handling and color-intent resolution for the chalk-on-blackboard
//! look.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Mode**: the binary display theme (dark blackboard or light paper)
//! - **Color intents**: semantic roles such as "primary accent" that content
//!   blocks use instead of concrete colors
//! - **Resolver**: a pure `(intent, mode) -> StyleTokens` function
//! - **ThemeStore**: the current mode, its persistence and its subscribers
//!
//! # Quick Start
//!
//! ```rust
//! use chalkboard_theme::{resolve, ColorIntent, MemoryStorage, Mode, ThemeStore};
//!
//! let store = ThemeStore::new(MemoryStorage::new());
//! assert_eq!(store.mode(), Mode::Dark);
//!
//! let tokens = resolve(ColorIntent::AccentPrimary, store.mode());
//! assert_eq!(tokens.text_class(), "text-yellow-200");
//!
//! store.toggle();
//! let tokens = resolve(ColorIntent::AccentPrimary, store.mode());
//! assert_eq!(tokens.decoration_color_class(), "decoration-yellow-200");
//! ```
//!
//! # Identity across modes
//!
//! In dark mode an accent is recognized by its color. In light mode every
//! accent shares the page foreground and is recognized by the color of its
//! wavy underline instead, which is the accent's dark-mode color.

pub mod config;
pub mod error;
pub mod intent;
pub mod mode;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod tokens;

pub use config::{StorageBackend, ThemeConfig};
pub use error::{StorageError, ThemeError};
pub use intent::ColorIntent;
pub use mode::Mode;
pub use resolver::{resolve, resolve_named};
pub use storage::{FileStorage, MemoryStorage, ModeStorage, STORAGE_KEY};
pub use store::{Subscription, ThemeStore};
pub use tokens::*;
