//! Ordered, deduplicated ingredient selection.

use serde::{Deserialize, Serialize};

/// The set of ingredients the user has currently chosen.
///
/// Entries keep their insertion order for display. Membership is decided by
/// the canonical form (trimmed, Unicode-lowercased), so "Tomato " and
/// "tomato" are the same entry; the stored display form keeps whatever the
/// user typed first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSelection {
    items: Vec<String>,
}

impl IngredientSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient to the end of the selection.
    ///
    /// The input is trimmed first. Blank input and duplicates are silently
    /// ignored. Returns `true` if the selection changed, which callers use to
    /// clear the transient input buffer.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    /// Removes an ingredient by identity.
    ///
    /// No-op if the ingredient is not present; never errors. Returns `true`
    /// if the selection changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let needle = canonical(name);
        let before = self.items.len();
        self.items.retain(|item| canonical(item) != needle);
        self.items.len() != before
    }

    /// Whether an ingredient with the same identity is already selected.
    pub fn contains(&self, name: &str) -> bool {
        let needle = canonical(name);
        self.items.iter().any(|item| canonical(item) == needle)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates the selected display forms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Joins the selected display forms with the given separator.
    pub fn joined(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

/// Canonical identity form used for membership checks.
fn canonical(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut selection = IngredientSelection::new();
        assert!(selection.add("  tomato  "));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["tomato"]);
    }

    #[test]
    fn test_add_blank_is_a_noop() {
        let mut selection = IngredientSelection::new();
        assert!(!selection.add(""));
        assert!(!selection.add("   "));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_add_duplicate_is_a_noop() {
        let mut selection = IngredientSelection::new();
        assert!(selection.add("tomato"));
        assert!(!selection.add("tomato"));
        assert!(!selection.add(" Tomato "));
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["tomato"]);
    }

    #[test]
    fn test_remove_absent_is_a_noop() {
        let mut selection = IngredientSelection::new();
        selection.add("rice");
        assert!(!selection.remove("pasta"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_then_add_appends_at_the_end() {
        let mut selection = IngredientSelection::new();
        selection.add("tomato");
        selection.add("onion");
        selection.add("garlic");

        assert!(selection.remove("tomato"));
        assert!(selection.add("tomato"));

        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["onion", "garlic", "tomato"]
        );
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut selection = IngredientSelection::new();
        for name in ["eggs", "spinach", "cheese"] {
            selection.add(name);
        }
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["eggs", "spinach", "cheese"]
        );
        assert_eq!(selection.joined(", "), "eggs, spinach, cheese");
    }

    #[test]
    fn test_arabic_entries_keep_their_script() {
        let mut selection = IngredientSelection::new();
        assert!(selection.add("طماطم"));
        assert!(!selection.add("طماطم"));
        assert!(selection.contains("طماطم"));
    }
}
