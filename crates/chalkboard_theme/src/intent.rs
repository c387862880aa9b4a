//! Semantic color roles

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::tokens::ChalkColor;

/// Semantic color role used by content blocks
///
/// An intent is a stable identity independent of the display mode; the
/// resolver decides how that identity is shown in each mode.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorIntent {
    AccentPrimary,
    AccentSecondary,
    AccentTertiary,
    AccentQuaternary,
    Neutral,
}

impl ColorIntent {
    /// Full intent list
    pub const ALL: [ColorIntent; 5] = [
        ColorIntent::AccentPrimary,
        ColorIntent::AccentSecondary,
        ColorIntent::AccentTertiary,
        ColorIntent::AccentQuaternary,
        ColorIntent::Neutral,
    ];

    /// Stable intent name for config/serialization.
    pub fn name(self) -> &'static str {
        match self {
            Self::AccentPrimary => "accent-primary",
            Self::AccentSecondary => "accent-secondary",
            Self::AccentTertiary => "accent-tertiary",
            Self::AccentQuaternary => "accent-quaternary",
            Self::Neutral => "neutral",
        }
    }

    /// Chalk color that identifies this intent, `None` for [`ColorIntent::Neutral`]
    pub fn accent(self) -> Option<ChalkColor> {
        match self {
            Self::AccentPrimary => Some(ChalkColor::Yellow200),
            Self::AccentSecondary => Some(ChalkColor::Cyan300),
            Self::AccentTertiary => Some(ChalkColor::Pink300),
            Self::AccentQuaternary => Some(ChalkColor::Green300),
            Self::Neutral => None,
        }
    }

    /// Look up an intent by name, degrading to [`ColorIntent::Neutral`].
    ///
    /// A typo in a decorative role only costs color, so it never fails.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Neutral)
    }
}

impl FromStr for ColorIntent {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|intent| intent.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ThemeError::UnknownIntent(s.to_string()))
    }
}

impl Display for ColorIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_parse() {
        for intent in ColorIntent::ALL {
            assert_eq!(intent.name().parse::<ColorIntent>(), Ok(intent));
        }
    }

    #[test]
    fn test_unknown_name_degrades_to_neutral() {
        assert_eq!(ColorIntent::from_name("accent-primay"), ColorIntent::Neutral);
        assert_eq!(ColorIntent::from_name(""), ColorIntent::Neutral);
        assert_eq!(
            ColorIntent::from_name("Accent-Secondary"),
            ColorIntent::AccentSecondary
        );
    }

    #[test]
    fn test_accents_are_distinct() {
        let accents: Vec<_> = ColorIntent::ALL.iter().filter_map(|i| i.accent()).collect();
        assert_eq!(accents.len(), 4);
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
