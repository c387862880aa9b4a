//! Chalked element descriptors and their presentation attributes

use std::fmt::{Display, Formatter};

use chalkboard_theme::ColorIntent;

/// Stroke width of a `border-2` outline, the most common chalk line
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// A visual element drawn with chalk
///
/// Carries the element's color intent and, optionally, the filter that gives
/// it the hand-drawn wobble together with the width of the line it draws.
#[derive(Clone, Debug, PartialEq)]
pub struct ChalkElement {
    pub name: String,
    pub intent: ColorIntent,
    pub filter: Option<String>,
    pub stroke_width: f32,
}

impl ChalkElement {
    pub fn new(name: impl Into<String>, intent: ColorIntent) -> Self {
        Self {
            name: name.into(),
            intent,
            filter: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }

    /// Element whose intent is given by name; unknown names become neutral
    pub fn with_intent_name(name: impl Into<String>, intent: &str) -> Self {
        Self::new(name, ColorIntent::from_name(intent))
    }

    pub fn filter(mut self, id: impl Into<String>) -> Self {
        self.filter = Some(id.into());
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }
}

/// Presentation attributes for one element in the current mode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementStyle {
    pub class: String,
    /// Inline style, empty when the element has no filter
    pub style: String,
}

impl Display for ElementStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "class=\"{}\"", self.class)?;
        if !self.style.is_empty() {
            write!(f, " style=\"{}\"", self.style)?;
        }
        Ok(())
    }
}
