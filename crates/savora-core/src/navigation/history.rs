//! Navigation history stack.

use serde::{Deserialize, Serialize};

/// Ordered record of visited screens.
///
/// Every committed screen change pushes its identifier, including a repeat of
/// the current top (no dedup). The only other mutation is pop-on-back, so the
/// top always names the current screen once navigation has started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    screens: Vec<String>,
}

impl HistoryStack {
    /// Creates an empty stack; the first recorded screen becomes the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed navigation to the given screen.
    pub fn push(&mut self, screen: impl Into<String>) {
        self.screens.push(screen.into());
    }

    /// Removes and returns the current top entry.
    pub fn pop(&mut self) -> Option<String> {
        self.screens.pop()
    }

    /// The screen currently on top, if any navigation has been recorded.
    pub fn current(&self) -> Option<&str> {
        self.screens.last().map(String::as_str)
    }

    /// Number of recorded entries.
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The recorded path from root to current screen.
    pub fn screens(&self) -> &[String] {
        &self.screens
    }
}
