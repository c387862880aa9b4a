//! Resolved style bundles

use serde::{Deserialize, Serialize};

use super::ChalkColor;

/// Text decoration style
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    #[default]
    None,
    /// Hand-drawn looking underline carrying an accent color
    WavyUnderline,
}

impl Decoration {
    pub fn class(self) -> &'static str {
        match self {
            Decoration::None => "no-underline",
            Decoration::WavyUnderline => "underline decoration-wavy underline-offset-4",
        }
    }
}

/// Presentation tokens for one `(intent, mode)` pair
///
/// Immutable once resolved. Every accessor yields a non-empty class, so
/// "no decoration" is still spelled out explicitly.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTokens {
    pub text: ChalkColor,
    pub border: ChalkColor,
    pub decoration: Decoration,
    pub decoration_color: ChalkColor,
}

impl StyleTokens {
    /// Bundle with one color for text and border and no decoration
    pub const fn plain(color: ChalkColor) -> Self {
        Self {
            text: color,
            border: color,
            decoration: Decoration::None,
            decoration_color: ChalkColor::Transparent,
        }
    }

    /// Bundle identified by an underline instead of its text color
    pub const fn underlined(color: ChalkColor, underline: ChalkColor) -> Self {
        Self {
            text: color,
            border: color,
            decoration: Decoration::WavyUnderline,
            decoration_color: underline,
        }
    }

    pub fn text_class(&self) -> String {
        format!("text-{}", self.text.name())
    }

    pub fn border_class(&self) -> String {
        format!("border-{}", self.border.name())
    }

    pub fn decoration_class(&self) -> &'static str {
        self.decoration.class()
    }

    pub fn decoration_color_class(&self) -> String {
        format!("decoration-{}", self.decoration_color.name())
    }

    /// All four classes joined by spaces, in field order
    pub fn class_list(&self) -> String {
        format!(
            "{} {} {} {}",
            self.text_class(),
            self.border_class(),
            self.decoration_class(),
            self.decoration_color_class()
        )
    }

    pub fn is_decorated(&self) -> bool {
        self.decoration != Decoration::None
    }
}
