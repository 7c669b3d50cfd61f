//! # Query Handler
//!
//! Resolves the persona, builds the prompt, and forwards it to the completion
//! client. `submit` adds input validation and turns failures into displayable
//! messages for the front ends.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Added submit() with empty-input warning and inline error text
//! - 1.0.0: Initial release

use crate::features::personas::PersonaManager;
use crate::features::query::client::CompletionClient;
use crate::features::query::prompt::Prompt;
use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Warning shown when the text area is empty
pub const EMPTY_INPUT_WARNING: &str = "テキストを入力してください。";

/// Result of one form submission, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Answered(String),
    /// Nothing was sent
    EmptyInput,
    /// Error text including the underlying failure
    Failed(String),
}

impl SubmitOutcome {
    /// Text to show the user
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Answered(answer) => answer,
            SubmitOutcome::EmptyInput => EMPTY_INPUT_WARNING,
            SubmitOutcome::Failed(error) => error,
        }
    }
}

/// Inline error text for a failed call
pub fn failure_message(error: &anyhow::Error) -> String {
    format!("エラーが発生しました: {error}")
}

#[derive(Clone)]
pub struct QueryHandler {
    personas: PersonaManager,
    client: Arc<dyn CompletionClient>,
}

impl QueryHandler {
    pub fn new(personas: PersonaManager, client: Arc<dyn CompletionClient>) -> Self {
        Self { personas, client }
    }

    pub fn personas(&self) -> &PersonaManager {
        &self.personas
    }

    /// Build the prompt for a label and user text
    pub fn build_prompt(&self, user_text: &str, persona_label: &str) -> Prompt {
        Prompt::new(self.personas.get_system_prompt(persona_label), user_text)
    }

    /// Ask the model as the given persona. Client errors propagate unchanged.
    pub async fn query(&self, user_text: &str, persona_label: &str) -> Result<String> {
        let prompt = self.build_prompt(user_text, persona_label);
        self.client.complete(&prompt).await
    }

    /// Validate and run one form submission. Never returns an error.
    pub async fn submit(&self, user_text: &str, persona_label: &str) -> SubmitOutcome {
        if user_text.trim().is_empty() {
            return SubmitOutcome::EmptyInput;
        }

        let request_id = Uuid::new_v4();
        let started = Instant::now();
        info!(
            "[{request_id}] Query as '{persona_label}' ({} chars, model: {})",
            user_text.chars().count(),
            self.client.model()
        );

        match self.query(user_text, persona_label).await {
            Ok(answer) => {
                info!(
                    "[{request_id}] Answered in {}ms ({} chars)",
                    started.elapsed().as_millis(),
                    answer.chars().count()
                );
                SubmitOutcome::Answered(answer)
            }
            Err(e) => {
                warn!("[{request_id}] Completion failed: {e}");
                SubmitOutcome::Failed(failure_message(&e))
            }
        }
    }
}
