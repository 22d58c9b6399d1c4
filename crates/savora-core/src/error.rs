//! Error types for the Savora core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Language;
use crate::text;

/// A shared error type for the Savora application core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SavoraError {
    /// The recipe service answered with a non-success HTTP status.
    #[error("Service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// One of the two response decode stages failed.
    #[error("Decode error at {stage} stage: {message}")]
    Decode { stage: DecodeStage, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The decode stage at which a service response was rejected.
///
/// The service double-encodes its payload: the transport body is a JSON
/// envelope whose `response` field holds a second JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStage {
    /// The outer transport envelope.
    Envelope,
    /// The embedded recipe document.
    Document,
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStage::Envelope => write!(f, "envelope"),
            DecodeStage::Document => write!(f, "document"),
        }
    }
}

impl SavoraError {
    /// Creates a Service error from an HTTP status and response body.
    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status,
            body: body.into(),
        }
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Decode error for the given stage.
    pub fn decode(stage: DecodeStage, message: impl Into<String>) -> Self {
        Self::Decode {
            stage,
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Service error.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Check if this is a Network error.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a Decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the message to show the user for this error.
    ///
    /// Server-provided text is surfaced as-is when available; decode failures
    /// map to a fixed localized message (the underlying detail is logged, not
    /// shown); everything else falls back to a generic localized message.
    pub fn user_message(&self, language: Language) -> String {
        let text = text::ui_text(language);
        match self {
            Self::Service { body, .. } if !body.trim().is_empty() => body.clone(),
            Self::Decode { .. } => text.parse_failure.to_string(),
            _ => text.generic_error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SavoraError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// A type alias for `Result<T, SavoraError>`.
pub type Result<T> = std::result::Result<T, SavoraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_surfaces_server_body() {
        let err = SavoraError::service(500, "model unavailable");
        assert!(err.is_service());
        assert_eq!(err.user_message(Language::English), "model unavailable");
    }

    #[test]
    fn test_service_error_with_empty_body_falls_back() {
        let err = SavoraError::service(502, "  ");
        assert_eq!(err.user_message(Language::English), "Something went wrong");
        assert_eq!(err.user_message(Language::Arabic), "حدث خطأ");
    }

    #[test]
    fn test_decode_error_uses_fixed_message() {
        let err = SavoraError::decode(DecodeStage::Document, "expected value at line 1");
        assert!(err.is_decode());
        assert_eq!(
            err.user_message(Language::English),
            "Could not read the recipe results"
        );
    }

    #[test]
    fn test_network_error_uses_generic_message() {
        let err = SavoraError::network("connection refused");
        assert!(err.is_network());
        assert_eq!(err.user_message(Language::English), "Something went wrong");
    }
}
