//! # Personas Feature
//!
//! Expert persona registry mapping selector labels to system prompts.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Ordered registry and default prompt fallback
//! - 1.0.0: Initial release

pub mod manager;

pub use manager::{Persona, PersonaManager, DEFAULT_SYSTEM_PROMPT};
