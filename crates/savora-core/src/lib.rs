//! Savora core domain layer.
//!
//! Pure in-memory state for the recipe suggestion client: the bilingual
//! ingredient catalog and selection, the per-session configuration and
//! lifecycle state, and the back-navigation history. Network access lives in
//! `savora-interaction`; this crate never performs I/O.

pub mod error;
pub mod ingredient;
pub mod navigation;
pub mod session;
pub mod text;

// Re-export common error type
pub use error::{DecodeStage, Result, SavoraError};
