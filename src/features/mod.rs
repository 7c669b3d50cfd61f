//! # Features
//!
//! - `personas`: expert persona registry
//! - `query`: prompt assembly and the completion client

pub mod personas;
pub mod query;

pub use personas::{Persona, PersonaManager, DEFAULT_SYSTEM_PROMPT};
pub use query::{CompletionClient, OpenAiClient, Prompt, QueryHandler, SubmitOutcome};
