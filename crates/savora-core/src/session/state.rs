//! Session lifecycle state.

use serde::{Deserialize, Serialize};

use super::model::Recipe;

/// Where a recipe-generation session currently stands.
///
/// Exactly one variant holds at any time. `Loading` carries no payload:
/// entering it drops any previously displayed recipes or error, and a new
/// result fully replaces whatever was shown before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionState {
    /// Nothing requested yet, or the app just started.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request produced a (possibly empty) list of recipes.
    Success { recipes: Vec<Recipe> },
    /// The last request failed; `message` is ready for display.
    Error { message: String },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the recipes if the session is in the success state.
    pub fn recipes(&self) -> Option<&[Recipe]> {
        match self {
            Self::Success { recipes } => Some(recipes),
            _ => None,
        }
    }

    /// Returns the display message if the session is in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}
