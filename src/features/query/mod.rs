//! # Query Feature
//!
//! Persona-conditioned single-turn questions to the hosted model.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Form submission outcomes
//! - 1.0.0: Initial release

pub mod client;
pub mod handler;
pub mod prompt;

pub use client::{CompletionClient, OpenAiClient};
pub use handler::{failure_message, QueryHandler, SubmitOutcome, EMPTY_INPUT_WARNING};
pub use prompt::Prompt;
