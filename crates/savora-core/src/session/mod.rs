//! Session domain module.
//!
//! Everything that describes one recipe-generation session: the user-chosen
//! configuration, the request message construction, the recipe model, and the
//! lifecycle state.
//!
//! # Module Structure
//!
//! - `config`: Language and recipe-count settings (`Language`, `SessionConfig`)
//! - `model`: Recipe domain model (`Recipe`)
//! - `state`: Lifecycle state (`SessionState`)
//! - `prompt`: Deterministic outbound message construction

mod config;
mod model;
mod prompt;
mod state;

// Re-export public API
pub use config::{
    DEFAULT_RECIPE_COUNT, Language, MAX_RECIPE_COUNT, MIN_RECIPE_COUNT, SessionConfig,
};
pub use model::Recipe;
pub use prompt::build_message;
pub use state::SessionState;
