//! Two-stage decoding of recipe service responses.
//!
//! The service wraps a model-generated string, so its payload arrives
//! double-encoded: the transport body is a JSON envelope, and the envelope's
//! `response` field holds a second JSON document with the recipes. The two
//! stages are separate functions so either failure is independently
//! testable.

use savora_core::session::Recipe;
use savora_core::{DecodeStage, Result, SavoraError};
use serde::Deserialize;
use serde_json::Value;

/// The outer transport envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Embedded JSON text carrying the recipe document.
    pub response: String,
    /// Model identifier reported by the service.
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecipeDocument {
    #[serde(default)]
    recipes: Vec<Value>,
}

/// Stage one: decodes the raw success body into the envelope.
///
/// # Errors
///
/// `Decode` at the envelope stage when the body is not a JSON object with a
/// string `response` field.
pub fn decode_reply(body: &str) -> Result<ChatReply> {
    serde_json::from_str(body)
        .map_err(|err| SavoraError::decode(DecodeStage::Envelope, err.to_string()))
}

/// Stage two: decodes the embedded document into recipes.
///
/// A missing `recipes` field yields an empty list. Entries inside the array
/// are extracted leniently and never rejected individually.
///
/// # Errors
///
/// `Decode` at the document stage when the embedded text is not valid JSON
/// or `recipes` is present but not an array.
pub fn decode_recipes(payload: &str) -> Result<Vec<Recipe>> {
    let document: RecipeDocument = serde_json::from_str(payload)
        .map_err(|err| SavoraError::decode(DecodeStage::Document, err.to_string()))?;
    Ok(document.recipes.iter().map(Recipe::from_value).collect())
}
