//! Builtin bilingual ingredient catalog.
//!
//! The catalog is the static reference list the picker offers alongside
//! free-text entry. It is loaded once at startup and never modified by users.

use std::sync::OnceLock;

use serde::Serialize;

use crate::session::Language;

/// A builtin catalog entry with one display form per supported language.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// Stable identity, independent of display language.
    pub key: &'static str,
    /// English display form.
    pub english: &'static str,
    /// Arabic display form.
    pub arabic: &'static str,
}

impl CatalogEntry {
    /// Creates a new catalog entry keyed by its English form.
    pub const fn new(english: &'static str, arabic: &'static str) -> Self {
        Self {
            key: english,
            english,
            arabic,
        }
    }

    /// Returns the display form for the given language.
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Arabic => self.arabic,
        }
    }
}

/// Static storage for the catalog (initialized once).
static CATALOG: OnceLock<Vec<CatalogEntry>> = OnceLock::new();

/// Returns a reference to the full ingredient catalog, in display order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG.get_or_init(|| {
        vec![
            CatalogEntry::new("tomato", "طماطم"),
            CatalogEntry::new("potato", "بطاطس"),
            CatalogEntry::new("onion", "بصل"),
            CatalogEntry::new("carrot", "جزر"),
            CatalogEntry::new("zucchini", "كوسا"),
            CatalogEntry::new("eggplant", "باذنجان"),
            CatalogEntry::new("bell pepper", "فلفل حلو"),
            CatalogEntry::new("cucumber", "خيار"),
            CatalogEntry::new("lettuce", "خس"),
            CatalogEntry::new("spinach", "سبانخ"),
            CatalogEntry::new("broccoli", "بروكولي"),
            CatalogEntry::new("cauliflower", "قرنبيط"),
            CatalogEntry::new("cabbage", "ملفوف"),
            CatalogEntry::new("garlic", "ثوم"),
            CatalogEntry::new("apple", "تفاح"),
            CatalogEntry::new("banana", "موز"),
            CatalogEntry::new("orange", "برتقال"),
            CatalogEntry::new("lemon", "ليمون"),
            CatalogEntry::new("strawberry", "فراولة"),
            CatalogEntry::new("mango", "مانجو"),
            CatalogEntry::new("rice", "أرز"),
            CatalogEntry::new("pasta", "معكرونة"),
            CatalogEntry::new("eggs", "بيض"),
            CatalogEntry::new("chicken", "دجاج"),
            CatalogEntry::new("beans", "فاصوليا"),
        ]
    })
}

/// Filters the catalog by a case-insensitive substring match against the
/// active language's display form.
///
/// Pure lookup with no side effects. An empty query matches every entry.
pub fn search(query: &str, language: Language) -> Vec<&'static CatalogEntry> {
    let needle = query.trim().to_lowercase();
    catalog()
        .iter()
        .filter(|entry| entry.display_name(language).to_lowercase().contains(&needle))
        .collect()
}
