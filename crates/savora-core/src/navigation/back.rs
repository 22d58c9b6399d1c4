//! Back-signal handling: pop history or confirm exit.

use std::sync::Arc;

use async_trait::async_trait;

use crate::session::Language;
use crate::text;

use super::history::HistoryStack;

/// Parameters for a yes/no confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub ok_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    /// Builds the localized exit-confirmation request.
    pub fn exit(language: Language) -> Self {
        let text = text::ui_text(language);
        Self {
            title: text.exit_title.to_string(),
            message: text.exit_message.to_string(),
            ok_label: text.exit_confirm.to_string(),
            cancel_label: text.exit_cancel.to_string(),
        }
    }
}

/// Platform confirmation dialog, injected so tests can fake it.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Shows the dialog and returns `true` on the affirmative button.
    /// A dismissed dialog counts as negative.
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// What the host shell should do after a back signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// History was popped; navigate to the screen now on top.
    Navigated { screen: String },
    /// The user confirmed leaving the app; the host terminates the process.
    Exit,
    /// Nothing changes: the user declined the exit prompt.
    Stayed,
}

/// Decides between popping history and prompting for exit.
///
/// Holds no platform resources; dropping it is all the teardown there is.
pub struct BackHandler {
    stack: HistoryStack,
    prompt: Arc<dyn ConfirmationPrompt>,
    language: Language,
}

impl BackHandler {
    /// Creates a handler with an empty history.
    pub fn new(prompt: Arc<dyn ConfirmationPrompt>, language: Language) -> Self {
        Self {
            stack: HistoryStack::new(),
            prompt,
            language,
        }
    }

    /// Records a committed screen change.
    pub fn record_navigation(&mut self, screen: impl Into<String>) {
        self.stack.push(screen);
    }

    /// Updates the language used for the exit prompt.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Handles one back signal.
    ///
    /// With history to unwind the current screen is popped without any
    /// prompt. On the root screen the exit confirmation is shown instead;
    /// the handler never terminates the process itself, it reports
    /// [`BackOutcome::Exit`] for the host to act on.
    pub async fn handle_back(&mut self) -> BackOutcome {
        if self.stack.depth() > 1 {
            self.stack.pop();
            let screen = self
                .stack
                .current()
                .expect("stack keeps its root after a guarded pop")
                .to_string();
            return BackOutcome::Navigated { screen };
        }

        if self.prompt.confirm(ConfirmRequest::exit(self.language)).await {
            BackOutcome::Exit
        } else {
            BackOutcome::Stayed
        }
    }

    /// The recorded navigation history.
    pub fn stack(&self) -> &HistoryStack {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake dialog with a scripted answer.
    struct ScriptedPrompt {
        answer: bool,
        invocations: AtomicUsize,
    }

    impl ScriptedPrompt {
        fn new(answer: bool) -> Arc<Self> {
            Arc::new(Self {
                answer,
                invocations: AtomicUsize::new(0),
            })
        }

        fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConfirmationPrompt for ScriptedPrompt {
        async fn confirm(&self, _request: ConfirmRequest) -> bool {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    #[tokio::test]
    async fn test_back_pops_until_the_root_then_prompts() {
        let prompt = ScriptedPrompt::new(true);
        let mut handler = BackHandler::new(prompt.clone(), Language::English);
        handler.record_navigation("A");
        handler.record_navigation("B");
        handler.record_navigation("C");

        assert_eq!(
            handler.handle_back().await,
            BackOutcome::Navigated {
                screen: "B".to_string()
            }
        );
        assert_eq!(handler.stack().screens(), ["A", "B"]);

        assert_eq!(
            handler.handle_back().await,
            BackOutcome::Navigated {
                screen: "A".to_string()
            }
        );
        assert_eq!(handler.stack().screens(), ["A"]);
        assert_eq!(prompt.invocations(), 0);

        // Single entry left: this back signal asks instead of popping.
        assert_eq!(handler.handle_back().await, BackOutcome::Exit);
        assert_eq!(prompt.invocations(), 1);
        assert_eq!(handler.stack().screens(), ["A"]);
    }

    #[tokio::test]
    async fn test_declined_exit_changes_nothing() {
        let prompt = ScriptedPrompt::new(false);
        let mut handler = BackHandler::new(prompt.clone(), Language::English);
        handler.record_navigation("/");

        assert_eq!(handler.handle_back().await, BackOutcome::Stayed);
        assert_eq!(handler.stack().screens(), ["/"]);
        assert_eq!(prompt.invocations(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_entries_pop_one_at_a_time() {
        let prompt = ScriptedPrompt::new(false);
        let mut handler = BackHandler::new(prompt, Language::English);
        handler.record_navigation("/home");
        handler.record_navigation("/home");

        assert_eq!(
            handler.handle_back().await,
            BackOutcome::Navigated {
                screen: "/home".to_string()
            }
        );
        assert_eq!(handler.stack().depth(), 1);
    }

    #[tokio::test]
    async fn test_exit_prompt_is_localized() {
        struct CapturingPrompt {
            seen: tokio::sync::Mutex<Option<ConfirmRequest>>,
        }

        #[async_trait]
        impl ConfirmationPrompt for CapturingPrompt {
            async fn confirm(&self, request: ConfirmRequest) -> bool {
                *self.seen.lock().await = Some(request);
                false
            }
        }

        let prompt = Arc::new(CapturingPrompt {
            seen: tokio::sync::Mutex::new(None),
        });
        let mut handler = BackHandler::new(prompt.clone(), Language::Arabic);
        handler.record_navigation("/");
        handler.handle_back().await;

        let seen = prompt.seen.lock().await.clone().unwrap();
        assert_eq!(seen, ConfirmRequest::exit(Language::Arabic));
        assert_eq!(seen.ok_label, "نعم");
    }
}
