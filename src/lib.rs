// Core layer - configuration and credentials
pub mod core;

// Features layer - personas and the query pipeline
pub mod features;

// TUI layer - terminal form (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items
pub use features::{
    // Personas
    Persona, PersonaManager, DEFAULT_SYSTEM_PROMPT,
    // Query
    CompletionClient, OpenAiClient, Prompt, QueryHandler, SubmitOutcome,
};
