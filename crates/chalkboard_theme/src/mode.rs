//! Display mode

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Binary display theme
///
/// Dark is the blackboard look and the default on first load.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    /// Both modes, dark first
    pub const ALL: [Mode; 2] = [Mode::Dark, Mode::Light];

    /// The opposite mode
    pub fn toggle(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    /// Literal value written to storage
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    /// Decode a persisted value.
    ///
    /// Missing or unrecognized values fall back to [`Mode::Dark`].
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Mode::Dark),
            "light" => Ok(Mode::Light),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Mode::Dark.toggle(), Mode::Light);
        assert_eq!(Mode::Light.toggle(), Mode::Dark);
        assert_eq!(Mode::default(), Mode::Dark);
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(" Light ".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!("DARK".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!(
            "sepia".parse::<Mode>(),
            Err(ThemeError::UnknownMode("sepia".into()))
        );
    }

    #[test]
    fn test_from_stored_falls_back_to_dark() {
        assert_eq!(Mode::from_stored(None), Mode::Dark);
        assert_eq!(Mode::from_stored(Some("")), Mode::Dark);
        assert_eq!(Mode::from_stored(Some("blue")), Mode::Dark);
        assert_eq!(Mode::from_stored(Some("light")), Mode::Light);
    }
}
