//! Deterministic construction of the outbound chat message.

use crate::ingredient::IngredientSelection;

use super::config::{Language, SessionConfig};

/// Builds the natural-language instruction sent to the recipe service.
///
/// The message is a pure function of the selection and config: a language
/// directive (embedding the requested recipe count as a literal integer)
/// followed by the comma-joined ingredient list.
pub fn build_message(selection: &IngredientSelection, config: &SessionConfig) -> String {
    let directive = language_directive(config.language(), config.recipe_count());
    let ingredients = selection.joined(", ");
    format!("{directive} I have these ingredients: {ingredients}. Suggest recipes.")
}

fn language_directive(language: Language, recipe_count: u8) -> String {
    match language {
        Language::English => {
            format!("Reply in English only. Suggest exactly {recipe_count} recipes.")
        }
        Language::Arabic => {
            format!("رد باللغة العربية فقط. اقترح بالضبط {recipe_count} وصفات.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(names: &[&str]) -> IngredientSelection {
        let mut selection = IngredientSelection::new();
        for name in names {
            selection.add(name);
        }
        selection
    }

    #[test]
    fn test_english_message() {
        let selection = selection_of(&["tomato", "rice", "chicken"]);
        let mut config = SessionConfig::new(Language::English);
        config.set_recipe_count(2);

        assert_eq!(
            build_message(&selection, &config),
            "Reply in English only. Suggest exactly 2 recipes. \
             I have these ingredients: tomato, rice, chicken. Suggest recipes."
        );
    }

    #[test]
    fn test_arabic_message() {
        let selection = selection_of(&["طماطم", "أرز"]);
        let mut config = SessionConfig::new(Language::Arabic);
        config.set_recipe_count(3);

        assert_eq!(
            build_message(&selection, &config),
            "رد باللغة العربية فقط. اقترح بالضبط 3 وصفات. \
             I have these ingredients: طماطم, أرز. Suggest recipes."
        );
    }

    #[test]
    fn test_message_is_deterministic() {
        let selection = selection_of(&["eggs", "spinach"]);
        let config = SessionConfig::new(Language::English);
        assert_eq!(
            build_message(&selection, &config),
            build_message(&selection, &config)
        );
    }
}
