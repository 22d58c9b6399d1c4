//! Recipe domain model.
//!
//! Recipes are only ever produced by decoding a service response; the core
//! never constructs them by hand.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One suggested recipe as returned by the recipe service.
///
/// The upstream model is free-form, so every field is optional on the wire.
/// Entries are extracted leniently: a field that is missing or has an
/// unexpected shape becomes its empty default instead of failing the whole
/// response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Preparation time, as free text (e.g. "25 min").
    #[serde(default)]
    pub time: String,
    /// Serving count, as free text.
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Illustration URL attached by the service, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// Extracts a recipe from a raw JSON entry without rejecting it.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: text_field(value, "title"),
            description: text_field(value, "description"),
            time: text_field(value, "time"),
            servings: text_field(value, "servings"),
            ingredients: list_field(value, "ingredients"),
            steps: list_field(value, "steps"),
            image: value
                .get("image")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Reads a scalar field as display text; numbers are stringified.
fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Reads an array field of display strings; non-string items are stringified.
fn list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
