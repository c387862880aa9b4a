//! Showcase wiring

use std::collections::HashMap;

use chalkboard_filters::{svg, FilterRegistry};
use chalkboard_theme::{resolve, Mode, PageTokens, Subscription, ThemeStore};

use crate::config::AppConfig;
use crate::content::showcase_elements;
use crate::element::{ChalkElement, ElementStyle};
use crate::error::{AppError, Result};

/// Theme store and filter catalog shared by every view
pub struct Showcase {
    store: ThemeStore,
    filters: FilterRegistry,
}

impl Showcase {
    /// Build the showcase from config.
    ///
    /// Restores the persisted mode and validates every chalked element on
    /// the page against the filter catalog, so a bad filter reference fails
    /// here instead of rendering undecorated.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = ThemeStore::with_storage(config.theme.build_storage());
        let showcase = Self::with_parts(store, FilterRegistry::builtin());
        showcase.validate(&showcase_elements())?;

        tracing::info!(
            "Showcase ready: mode={}, {} filters",
            showcase.mode(),
            showcase.filters.len()
        );
        Ok(showcase)
    }

    /// Assemble from an existing store and catalog without validation
    pub fn with_parts(store: ThemeStore, filters: FilterRegistry) -> Self {
        Self { store, filters }
    }

    /// Check each element's filter reference and stroke budget
    pub fn validate<'a>(&self, elements: impl IntoIterator<Item = &'a ChalkElement>) -> Result<()> {
        let mut checked = 0usize;
        for element in elements {
            if let Some(id) = &element.filter {
                self.filters
                    .check_stroke(id, element.stroke_width)
                    .map_err(|source| AppError::Element {
                        element: element.name.clone(),
                        source,
                    })?;
                checked += 1;
            }
        }
        tracing::debug!("Validated {} filter references", checked);
        Ok(())
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    pub fn toggle_mode(&self) -> Mode {
        self.store.toggle()
    }

    /// Subscribe to mode changes
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Mode) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Presentation attributes for an element in the current mode
    pub fn style(&self, element: &ChalkElement) -> Result<ElementStyle> {
        self.style_in(element, self.mode())
    }

    /// Presentation attributes for an element in a given mode
    pub fn style_in(&self, element: &ChalkElement, mode: Mode) -> Result<ElementStyle> {
        let tokens = resolve(element.intent, mode);
        let style = match &element.filter {
            Some(id) => format!("filter: {}", self.filters.get(id)?.url()),
            None => String::new(),
        };

        Ok(ElementStyle {
            class: tokens.class_list(),
            style,
        })
    }

    /// Hidden `<svg>` block declaring every filter
    pub fn filter_defs(&self) -> String {
        svg::filter_defs(&self.filters)
    }

    /// CSS variables for the current mode's page colors
    pub fn css_variables(&self) -> HashMap<String, String> {
        PageTokens::for_mode(self.mode()).to_css_variable_map()
    }
}

impl std::fmt::Debug for Showcase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Showcase")
            .field("store", &self.store)
            .field("filters", &self.filters.len())
            .finish()
    }
}
