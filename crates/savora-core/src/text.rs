//! Localized strings surfaced by the core itself.
//!
//! The full UI string table lives in the presentation layer; this module only
//! carries the handful of strings that core logic has to produce on its own:
//! error messages shown to the user and the exit-confirmation labels.

use crate::session::Language;

/// Localized strings for one supported language.
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    /// Fixed message shown when the service response could not be decoded.
    pub parse_failure: &'static str,
    /// Generic fallback for transport failures without a server-provided message.
    pub generic_error: &'static str,
    /// Title of the exit-confirmation prompt.
    pub exit_title: &'static str,
    /// Body of the exit-confirmation prompt.
    pub exit_message: &'static str,
    /// Affirmative button label.
    pub exit_confirm: &'static str,
    /// Negative button label.
    pub exit_cancel: &'static str,
}

static ENGLISH: UiText = UiText {
    parse_failure: "Could not read the recipe results",
    generic_error: "Something went wrong",
    exit_title: "Exit App",
    exit_message: "Are you sure you want to exit?",
    exit_confirm: "Yes",
    exit_cancel: "No",
};

static ARABIC: UiText = UiText {
    parse_failure: "تعذر قراءة الوصفات",
    generic_error: "حدث خطأ",
    exit_title: "الخروج من التطبيق",
    exit_message: "هل أنت متأكد أنك تريد الخروج؟",
    exit_confirm: "نعم",
    exit_cancel: "لا",
};

/// Returns the string table for the given language.
pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_differ_per_language() {
        assert_ne!(
            ui_text(Language::English).generic_error,
            ui_text(Language::Arabic).generic_error
        );
    }
}
