//! Outline displacement
//!
//! Reproduces what a displacement filter does to an element's silhouette so
//! the wobble can be checked against the shape it decorates.

use crate::definition::FilterDefinition;
use crate::noise::fractal_noise;

/// Seed offset for the vertical (green channel) noise
const Y_CHANNEL_SEED: u32 = 0x85EB_CA6B;

/// Smallest gap between perimeter samples, in pixels
pub const MIN_SAMPLE_SPACING: f32 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Sampled silhouette of an element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Sample the perimeter of a `width x height` box every `spacing` pixels.
    ///
    /// Corners are always included. A non-positive spacing samples only the
    /// corners; a positive one is raised to at least [`MIN_SAMPLE_SPACING`].
    /// Edges of non-finite length are sampled at their start corner only.
    pub fn rect(width: f32, height: f32, spacing: f32) -> Self {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ];

        let mut points = Vec::new();
        for (i, start) in corners.iter().enumerate() {
            let end = corners[(i + 1) % corners.len()];
            let length = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
            let steps = if spacing > 0.0 && length.is_finite() {
                (length / spacing.max(MIN_SAMPLE_SPACING)).ceil().max(1.0) as usize
            } else {
                1
            };
            for step in 0..steps {
                let t = step as f32 / steps as f32;
                points.push(Point::new(
                    start.x + (end.x - start.x) * t,
                    start.y + (end.y - start.y) * t,
                ));
            }
        }

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Apply a filter's displacement to every point.
    ///
    /// Red and green noise channels drive x and y, each shifting by
    /// `scale * (C - 0.5)`. Grain leaves the outline untouched.
    pub fn displace(&self, filter: &FilterDefinition, seed: u32) -> Self {
        if !filter.kind.is_displacement() {
            return self.clone();
        }

        let params = filter.params;
        let points = self
            .points
            .iter()
            .map(|p| {
                let red = fractal_noise(p.x, p.y, params.base_frequency, params.octaves, seed);
                let green = fractal_noise(
                    p.x,
                    p.y,
                    params.base_frequency,
                    params.octaves,
                    seed ^ Y_CHANNEL_SEED,
                );
                Point::new(
                    p.x + params.displacement_scale * (red - 0.5),
                    p.y + params.displacement_scale * (green - 0.5),
                )
            })
            .collect();

        Self { points }
    }

    /// Largest per-axis distance between matching points.
    ///
    /// Outlines are compared point by point; extra points on either side are
    /// ignored.
    pub fn max_deviation(&self, other: &Outline) -> f32 {
        self.points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| (a.x - b.x).abs().max((a.y - b.y).abs()))
            .fold(0.0, f32::max)
    }

    /// Axis-aligned bounds as `(min, max)`, `None` when empty
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::FilterKind;

    #[test]
    fn test_rect_samples_corners_and_edges() {
        let outline = Outline::rect(10.0, 4.0, 2.0);
        // 5 + 2 + 5 + 2 samples
        assert_eq!(outline.len(), 14);
        assert_eq!(outline.points[0], Point::new(0.0, 0.0));
        assert!(outline.points.contains(&Point::new(10.0, 0.0)));
        assert!(outline.points.contains(&Point::new(10.0, 4.0)));
        assert!(outline.points.contains(&Point::new(0.0, 4.0)));
    }

    #[test]
    fn test_rect_tiny_spacing_is_bounded() {
        let outline = Outline::rect(10.0, 10.0, 1e-30);
        // 10px edges at the minimum spacing, give or take float rounding
        assert!(outline.len() >= 4000, "{}", outline.len());
        assert!(outline.len() <= 4004, "{}", outline.len());

        let corners_only = Outline::rect(f32::INFINITY, 10.0, 1.0);
        assert!(corners_only.len() <= 4 + 10, "{}", corners_only.len());
    }

    #[test]
    fn test_grain_keeps_outline() {
        let grain = FilterDefinition::new("g", FilterKind::Grain, 0.5, 3, 0.0);
        let outline = Outline::rect(20.0, 20.0, 1.0);
        assert_eq!(outline.displace(&grain, 3), outline);
    }

    #[test]
    fn test_displacement_moves_points() {
        let stroke = FilterDefinition::new("s", FilterKind::StrokeDisplacement, 0.2, 3, 3.0);
        let outline = Outline::rect(100.0, 50.0, 1.0);
        let wobbly = outline.displace(&stroke, 11);
        assert_eq!(wobbly.len(), outline.len());
        assert!(outline.max_deviation(&wobbly) > 0.0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Outline::default().bounds(), None);
        let (min, max) = Outline::rect(8.0, 3.0, 1.0).bounds().unwrap();
        assert_eq!(min, Point::new(0.0, 0.0));
        assert_eq!(max, Point::new(8.0, 3.0));
    }
}
