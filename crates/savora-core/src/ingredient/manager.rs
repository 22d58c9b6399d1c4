//! Ingredient set management for one session.

use crate::session::SessionConfig;

use super::catalog::{self, CatalogEntry};
use super::selection::IngredientSelection;

/// Owns the ingredient selection and the session configuration.
///
/// Pure in-memory state: no network, no persistence. All mutations are
/// synchronous and infallible; invalid inputs degrade to no-ops.
#[derive(Debug, Clone, Default)]
pub struct IngredientManager {
    selection: IngredientSelection,
    config: SessionConfig,
}

impl IngredientManager {
    /// Creates a manager with an empty selection and the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            selection: IngredientSelection::new(),
            config,
        }
    }

    /// Adds an ingredient; blank and duplicate input is silently ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        self.selection.add(raw)
    }

    /// Removes an ingredient; absent entries are silently ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        self.selection.remove(name)
    }

    /// Switches the display language without touching the selection.
    ///
    /// Catalog identities are language-agnostic and free-text entries keep
    /// their original script, so nothing else changes.
    pub fn toggle_language(&mut self) {
        self.config.toggle_language();
    }

    /// Sets the requested recipe count, clamped into the supported range.
    pub fn set_recipe_count(&mut self, count: u8) {
        self.config.set_recipe_count(count);
    }

    /// Filters the builtin catalog against the active language's display form.
    pub fn search_catalog(&self, query: &str) -> Vec<&'static CatalogEntry> {
        catalog::search(query, self.config.language())
    }

    pub fn selection(&self) -> &IngredientSelection {
        &self.selection
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Language;

    #[test]
    fn test_language_toggle_keeps_selection() {
        let mut manager = IngredientManager::new(SessionConfig::new(Language::English));
        manager.add_ingredient("tomato");
        manager.add_ingredient("طماطم معلبة");

        manager.toggle_language();

        assert_eq!(manager.config().language(), Language::Arabic);
        assert_eq!(
            manager.selection().iter().collect::<Vec<_>>(),
            vec!["tomato", "طماطم معلبة"]
        );
    }

    #[test]
    fn test_search_follows_active_language() {
        let mut manager = IngredientManager::new(SessionConfig::new(Language::English));
        assert_eq!(manager.search_catalog("tomato").len(), 1);
        assert!(manager.search_catalog("طماطم").is_empty());

        manager.toggle_language();
        assert_eq!(manager.search_catalog("طماطم").len(), 1);
    }
}
