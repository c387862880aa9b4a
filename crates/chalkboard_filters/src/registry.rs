//! Fixed filter catalog

use indexmap::IndexMap;

use crate::definition::{FilterDefinition, FilterKind};
use crate::error::{FilterError, Result};

/// Ambient blackboard texture
pub const BLACKBOARD_GRAIN: &str = "blackboard-grain";
/// Border and shape wobble
pub const CHALK_STROKE: &str = "chalk-stroke";
/// Glyph wobble
pub const CHALK_TEXT: &str = "chalk-text";

/// Catalog of filter definitions keyed by id
///
/// Populated once from [`FilterRegistry::builtin`]; iteration follows
/// registration order.
#[derive(Clone, Debug)]
pub struct FilterRegistry {
    filters: IndexMap<String, FilterDefinition>,
}

impl FilterRegistry {
    /// The chalk filter catalog
    pub fn builtin() -> Self {
        let catalog = [
            FilterDefinition::new(BLACKBOARD_GRAIN, FilterKind::Grain, 0.5, 3, 0.0),
            FilterDefinition::new(CHALK_STROKE, FilterKind::StrokeDisplacement, 0.2, 3, 3.0),
            FilterDefinition::new(CHALK_TEXT, FilterKind::TextDisplacement, 0.1, 1, 1.0),
        ];

        let filters: IndexMap<_, _> = catalog
            .into_iter()
            .map(|def| (def.id.clone(), def))
            .collect();
        tracing::debug!("FilterRegistry::builtin - {} filters", filters.len());

        Self { filters }
    }

    /// Look up a filter by id
    pub fn get(&self, id: &str) -> Result<&FilterDefinition> {
        self.filters.get(id).ok_or_else(|| FilterError::NotFound {
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.filters.contains_key(id)
    }

    /// All filters in registration order
    pub fn list(&self) -> impl ExactSizeIterator<Item = &FilterDefinition> + Clone + '_ {
        self.filters.values()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check that every referenced id exists.
    ///
    /// Fails on the first unknown id.
    pub fn validate_references<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for id in ids {
            self.get(id)?;
        }
        Ok(())
    }

    /// Look up a filter and check its wobble against a stroke width
    pub fn check_stroke(&self, id: &str, stroke_width: f32) -> Result<&FilterDefinition> {
        let def = self.get(id)?;
        if !def.fits_stroke(stroke_width) {
            return Err(FilterError::ExceedsStroke {
                id: def.id.clone(),
                offset: def.max_offset(),
                stroke_width,
            });
        }
        Ok(def)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
