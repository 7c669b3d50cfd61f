//! # Core Module
//!
//! Configuration and credential resolution shared by both front ends.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Secret store fallback for the API key
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod credentials;

// Re-export commonly used items
pub use config::Config;
pub use credentials::{resolve_api_key, SecretStore, MISSING_KEY_HELP};
