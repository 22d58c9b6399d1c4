//! RecipeApiAgent - REST client for the Savora recipe service.
//!
//! The service exposes a single chat endpoint that wraps an LLM: the agent
//! POSTs one natural-language instruction and receives a JSON envelope whose
//! `response` field carries the generated recipe document as embedded JSON
//! text. Decoding of that envelope lives in [`crate::response`]; this module
//! only moves bytes.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use savora_core::{Result, SavoraError};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// One outbound chat message.
///
/// `session_id` keys conversation state on the service side; a session keeps
/// the same id for its whole lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Transport seam for the recipe service, injected so tests can fake it.
#[async_trait]
pub trait RecipeAgent: Send + Sync {
    /// Sends one chat message and returns the raw success body.
    ///
    /// # Errors
    ///
    /// `Service` for a non-success HTTP status (carrying the raw body text),
    /// `Network` when no HTTP response was produced at all.
    async fn send_chat(&self, request: &ChatRequest) -> Result<String>;
}

/// Agent implementation that talks to the recipe service over HTTP.
#[derive(Clone)]
pub struct RecipeApiAgent {
    client: Client,
    base_url: String,
}

impl RecipeApiAgent {
    /// Creates a new agent for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Loads the service base URL from the environment.
    ///
    /// Reads `SAVORA_API_URL`, falling back to `http://localhost:5000`, the
    /// development default of the service.
    pub fn from_env() -> Self {
        let base_url = env::var("SAVORA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Checks whether the service is reachable and reports itself healthy.
    ///
    /// # Errors
    ///
    /// `Network` when the probe request could not be sent.
    pub async fn health(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: HealthResponse = match response.json().await {
            Ok(body) => body,
            Err(_) => return Ok(false),
        };
        Ok(body.status == "ok")
    }
}

#[async_trait]
impl RecipeAgent for RecipeApiAgent {
    async fn send_chat(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .header("content-type", "application/json")
            .json(request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SavoraError::service(status.as_u16(), body));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}
