//! Page-level color tokens

use std::collections::HashMap;

use crate::mode::Mode;

use super::ChalkColor;

/// Page colors for one mode
///
/// These back the `foreground` chalk color and the page background the
/// chalk is drawn on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTokens {
    pub background: u32,
    /// Card and panel background
    pub surface: u32,
    pub footer: u32,
    pub foreground: u32,
    pub muted: u32,
    pub selection: u32,
    pub selection_text: u32,
}

impl PageTokens {
    /// Blackboard page
    pub const DARK: PageTokens = PageTokens {
        background: 0x1A1A1A,
        surface: 0x222222,
        footer: 0x151515,
        foreground: 0xFFFFFF,
        muted: 0x9CA3AF,
        selection: 0xFEF08A,
        selection_text: 0x000000,
    };

    /// Paper page
    pub const LIGHT: PageTokens = PageTokens {
        background: 0xF4F1EA,
        surface: 0xFFFFFF,
        footer: 0xE9E5DA,
        foreground: 0x1A1A1A,
        muted: 0x4B5563,
        selection: 0x1A1A1A,
        selection_text: 0xF4F1EA,
    };

    pub fn for_mode(mode: Mode) -> &'static PageTokens {
        match mode {
            Mode::Dark => &Self::DARK,
            Mode::Light => &Self::LIGHT,
        }
    }

    /// Concrete value of a chalk color on this page, `None` for transparent
    pub fn color_hex(&self, color: ChalkColor) -> Option<u32> {
        match color {
            ChalkColor::Foreground => Some(self.foreground),
            other => other.hex(),
        }
    }

    /// Generate a CSS variable map from the page tokens.
    ///
    /// Keys are variable names without the `--` prefix, values are hex
    /// strings. Each accent is exported as `chalk-<name>`.
    ///
    /// ```
    /// use chalkboard_theme::{Mode, PageTokens};
    ///
    /// let vars = PageTokens::for_mode(Mode::Dark).to_css_variable_map();
    /// assert_eq!(vars["background"], "#1a1a1a");
    /// assert_eq!(vars["chalk-yellow-200"], "#fef08a");
    /// ```
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        fn hex(value: u32) -> String {
            format!("#{:06x}", value)
        }

        let mut vars = HashMap::with_capacity(7 + ChalkColor::ACCENTS.len());
        vars.insert("background".into(), hex(self.background));
        vars.insert("surface".into(), hex(self.surface));
        vars.insert("footer".into(), hex(self.footer));
        vars.insert("foreground".into(), hex(self.foreground));
        vars.insert("muted".into(), hex(self.muted));
        vars.insert("selection".into(), hex(self.selection));
        vars.insert("selection-text".into(), hex(self.selection_text));

        for accent in ChalkColor::ACCENTS {
            if let Some(value) = accent.hex() {
                vars.insert(format!("chalk-{}", accent.name()), hex(value));
            }
        }

        vars
    }
}
