//! Savora interaction layer.
//!
//! Connects the core domain state to the remote recipe service: the HTTP
//! agent, the two-stage response decoding, and [`RecipeSession`], which owns
//! one user's selection state and drives the request lifecycle.

pub mod recipe_api_agent;
pub mod response;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use savora_core::ingredient::{CatalogEntry, IngredientManager};
use savora_core::session::{self, Language, SessionConfig, SessionState};

pub use recipe_api_agent::{ChatRequest, RecipeAgent, RecipeApiAgent};
pub use response::ChatReply;

/// Drives one recipe-generation session.
///
/// A session owns the ingredient selection and configuration, builds the
/// outbound chat message, and moves through Idle → Loading → Success/Error.
/// Only one result can ever be shown: each `generate()` call takes a fresh
/// number from a monotonic counter, and a resolution is applied only while
/// its number is still the latest issued, so a slow older request can never
/// overwrite a newer one.
///
/// Cloning shares the underlying state; all methods take `&self`.
#[derive(Clone)]
pub struct RecipeSession {
    /// Conversation key sent to the service, fixed for the session lifetime.
    session_id: String,
    /// Ingredient selection and user-chosen configuration.
    manager: Arc<RwLock<IngredientManager>>,
    /// Current lifecycle state.
    state: Arc<RwLock<SessionState>>,
    /// Transport to the recipe service.
    agent: Arc<dyn RecipeAgent>,
    /// Monotonic request counter backing the stale-resolution guard.
    generation: Arc<AtomicU64>,
}

impl RecipeSession {
    /// Creates an idle session with an empty selection.
    ///
    /// # Arguments
    ///
    /// * `config` - Session configuration; seed the language from the
    ///   platform locale with [`SessionConfig::from_locale_tag`]
    /// * `agent` - Transport to the recipe service
    pub fn new(config: SessionConfig, agent: Arc<dyn RecipeAgent>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            manager: Arc::new(RwLock::new(IngredientManager::new(config))),
            state: Arc::new(RwLock::new(SessionState::Idle)),
            agent,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The conversation key sent with every chat request.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Adds an ingredient; blank and duplicate input is silently ignored.
    ///
    /// Returns `true` if the selection changed.
    pub async fn add_ingredient(&self, raw: &str) -> bool {
        self.manager.write().await.add_ingredient(raw)
    }

    /// Removes an ingredient; absent entries are silently ignored.
    pub async fn remove_ingredient(&self, name: &str) -> bool {
        self.manager.write().await.remove_ingredient(name)
    }

    /// Switches the display language without touching the selection.
    pub async fn toggle_language(&self) {
        self.manager.write().await.toggle_language();
    }

    /// Sets the requested recipe count, clamped into the supported range.
    pub async fn set_recipe_count(&self, count: u8) {
        self.manager.write().await.set_recipe_count(count);
    }

    /// The active language.
    pub async fn language(&self) -> Language {
        self.manager.read().await.config().language()
    }

    /// The current configuration snapshot.
    pub async fn config(&self) -> SessionConfig {
        *self.manager.read().await.config()
    }

    /// The selected ingredients in display order.
    pub async fn ingredients(&self) -> Vec<String> {
        self.manager
            .read()
            .await
            .selection()
            .iter()
            .map(str::to_string)
            .collect()
    }

    /// Filters the builtin catalog against the active language.
    pub async fn search_catalog(&self, query: &str) -> Vec<&'static CatalogEntry> {
        self.manager.read().await.search_catalog(query)
    }

    /// The current lifecycle state snapshot.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Requests recipes for the current selection.
    ///
    /// No-op while the selection is empty: no state change, no network call.
    /// Otherwise the state becomes `Loading` (dropping any previous result)
    /// before the single service call; the resolution is applied only if no
    /// newer `generate()` has started in the meantime.
    pub async fn generate(&self) {
        let (message, language) = {
            let manager = self.manager.read().await;
            if manager.selection().is_empty() {
                return;
            }
            (
                session::build_message(manager.selection(), manager.config()),
                manager.config().language(),
            )
        };

        // Claiming the number and entering Loading under the same lock keeps
        // the newest claim and the visible state consistent.
        let seq = {
            let mut state = self.state.write().await;
            *state = SessionState::Loading;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let request = ChatRequest {
            message,
            session_id: self.session_id.clone(),
        };
        let outcome = self.agent.send_chat(&request).await;

        let next = match outcome {
            Ok(body) => match response::decode_reply(&body)
                .and_then(|reply| response::decode_recipes(&reply.response))
            {
                Ok(recipes) => SessionState::Success { recipes },
                Err(err) => {
                    tracing::warn!(error = %err, "failed to decode recipe service response");
                    SessionState::Error {
                        message: err.user_message(language),
                    }
                }
            },
            Err(err) => SessionState::Error {
                message: err.user_message(language),
            },
        };

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != seq {
            tracing::debug!(sequence = seq, "discarding stale recipe resolution");
            return;
        }
        *state = next;
    }
}
