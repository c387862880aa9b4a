//! Filter definitions

use std::fmt::{Display, Formatter};

/// Kind of procedural effect
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FilterKind {
    /// Noise texture composited over the source, no displacement
    Grain,
    /// Edge displacement for borders and shapes
    StrokeDisplacement,
    /// Subtle displacement for glyphs
    TextDisplacement,
}

impl FilterKind {
    pub fn is_displacement(self) -> bool {
        !matches!(self, FilterKind::Grain)
    }
}

impl Display for FilterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FilterKind::Grain => "grain",
            FilterKind::StrokeDisplacement => "stroke-displacement",
            FilterKind::TextDisplacement => "text-displacement",
        })
    }
}

/// Turbulence and displacement parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// Noise frequency in cycles per pixel
    pub base_frequency: f32,
    pub octaves: u32,
    /// Displacement map scale in pixels; `0.0` for grain
    pub displacement_scale: f32,
}

/// Named, parameterized distortion effect
#[derive(Clone, Debug, PartialEq)]
pub struct FilterDefinition {
    pub id: String,
    pub kind: FilterKind,
    pub params: FilterParams,
}

impl FilterDefinition {
    pub fn new(
        id: impl Into<String>,
        kind: FilterKind,
        base_frequency: f32,
        octaves: u32,
        displacement_scale: f32,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            params: FilterParams {
                base_frequency,
                octaves,
                displacement_scale,
            },
        }
    }

    /// Largest distance any point can move, in pixels.
    ///
    /// A displacement map shifts by `scale * (C - 0.5)` with `C` in `[0, 1]`.
    pub fn max_offset(&self) -> f32 {
        if self.kind.is_displacement() {
            self.params.displacement_scale.abs() / 2.0
        } else {
            0.0
        }
    }

    /// Style reference usable from any element, e.g. `url(#chalk-stroke)`
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Whether the wobble stays within a stroke of the given width
    pub fn fits_stroke(&self, stroke_width: f32) -> bool {
        self.max_offset() <= stroke_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_never_displaces() {
        let grain = FilterDefinition::new("grain", FilterKind::Grain, 0.5, 3, 10.0);
        assert_eq!(grain.max_offset(), 0.0);
        assert!(grain.fits_stroke(0.0));
    }

    #[test]
    fn test_max_offset_is_half_scale() {
        let stroke = FilterDefinition::new("s", FilterKind::StrokeDisplacement, 0.2, 3, 3.0);
        assert_eq!(stroke.max_offset(), 1.5);
        assert!(stroke.fits_stroke(2.0));
        assert!(!stroke.fits_stroke(1.0));
        assert_eq!(stroke.url(), "url(#s)");
    }
}
