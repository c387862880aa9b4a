//! Chalk color tokens

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Concrete chalk color referenced by resolved style bundles
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChalkColor {
    Yellow200,
    Cyan300,
    Pink300,
    Green300,
    /// Page foreground; its concrete value comes from [`crate::PageTokens`]
    Foreground,
    Transparent,
}

impl ChalkColor {
    /// Accent colors in intent order
    pub const ACCENTS: [ChalkColor; 4] = [
        ChalkColor::Yellow200,
        ChalkColor::Cyan300,
        ChalkColor::Pink300,
        ChalkColor::Green300,
    ];

    /// Utility class suffix (`text-<name>`, `border-<name>`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Self::Yellow200 => "yellow-200",
            Self::Cyan300 => "cyan-300",
            Self::Pink300 => "pink-300",
            Self::Green300 => "green-300",
            Self::Foreground => "foreground",
            Self::Transparent => "transparent",
        }
    }

    /// Fixed sRGB value, `None` for mode-dependent or transparent colors
    pub fn hex(self) -> Option<u32> {
        match self {
            Self::Yellow200 => Some(0xFEF08A),
            Self::Cyan300 => Some(0x67E8F9),
            Self::Pink300 => Some(0xF9A8D4),
            Self::Green300 => Some(0x86EFAC),
            Self::Foreground | Self::Transparent => None,
        }
    }
}

impl Display for ChalkColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
