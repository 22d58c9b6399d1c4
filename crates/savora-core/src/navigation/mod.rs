//! Navigation domain module.
//!
//! Tracks the visited-screen history and decides whether a physical back
//! signal pops history or asks the user to confirm leaving the app.
//!
//! # Module Structure
//!
//! - `history`: Visited-screen stack (`HistoryStack`)
//! - `back`: Back-signal decision logic (`BackHandler`, `ConfirmationPrompt`)

mod back;
mod history;

// Re-export public API
pub use back::{BackHandler, BackOutcome, ConfirmRequest, ConfirmationPrompt};
pub use history::HistoryStack;
