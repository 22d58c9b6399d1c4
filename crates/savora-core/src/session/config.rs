//! Session configuration: language and requested recipe count.

use serde::{Deserialize, Serialize};

/// Supported reply languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    /// Picks the startup language from a BCP 47 locale tag.
    ///
    /// Tags beginning with `ar` select Arabic; everything else falls back to
    /// English. Callers read the platform locale once at construction and
    /// pass it in explicitly.
    pub fn from_locale_tag(tag: &str) -> Self {
        if tag.starts_with("ar") {
            Language::Arabic
        } else {
            Language::English
        }
    }

    /// Returns the other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

/// Lowest number of recipes a session may request.
pub const MIN_RECIPE_COUNT: u8 = 1;
/// Highest number of recipes a session may request.
pub const MAX_RECIPE_COUNT: u8 = 6;
/// Count used when the user has not chosen one.
pub const DEFAULT_RECIPE_COUNT: u8 = 3;

/// Per-session generation settings chosen by the user.
///
/// The language seeds from the platform locale once at startup and is only
/// changed by an explicit toggle afterwards. The recipe count is kept inside
/// `MIN_RECIPE_COUNT..=MAX_RECIPE_COUNT` by clamping out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    language: Language,
    recipe_count: u8,
}

impl SessionConfig {
    /// Creates a config with the given language and the default recipe count.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            recipe_count: DEFAULT_RECIPE_COUNT,
        }
    }

    /// Creates a config seeded from a platform locale tag.
    pub fn from_locale_tag(tag: &str) -> Self {
        Self::new(Language::from_locale_tag(tag))
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the number of recipes to request.
    pub fn recipe_count(&self) -> u8 {
        self.recipe_count
    }

    /// Switches between the two supported languages.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Sets the number of recipes to request, clamped into the supported range.
    pub fn set_recipe_count(&mut self, count: u8) {
        self.recipe_count = count.clamp(MIN_RECIPE_COUNT, MAX_RECIPE_COUNT);
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Language::English)
    }
}
