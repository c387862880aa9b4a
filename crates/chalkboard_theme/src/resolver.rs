//! Color intent resolution
//!
//! Dark mode shows an accent by its color. Light mode draws every accent in
//! the page foreground and moves the accent color onto a wavy underline, so
//! the intent stays recognizable against paper.

use crate::intent::ColorIntent;
use crate::mode::Mode;
use crate::tokens::{ChalkColor, StyleTokens};

/// Resolve the presentation tokens for an intent in a mode.
///
/// Total over `ColorIntent x Mode`; never allocates and never fails.
pub fn resolve(intent: ColorIntent, mode: Mode) -> StyleTokens {
    match (intent.accent(), mode) {
        (None, _) => StyleTokens::plain(ChalkColor::Foreground),
        (Some(accent), Mode::Dark) => StyleTokens::plain(accent),
        (Some(accent), Mode::Light) => StyleTokens::underlined(ChalkColor::Foreground, accent),
    }
}

/// Resolve an intent given by name.
///
/// Unknown names resolve to the neutral bundle.
pub fn resolve_named(name: &str, mode: Mode) -> StyleTokens {
    let intent = match name.parse::<ColorIntent>() {
        Ok(intent) => intent,
        Err(err) => {
            tracing::debug!("{}; using neutral style", err);
            ColorIntent::Neutral
        }
    };
    resolve(intent, mode)
}
