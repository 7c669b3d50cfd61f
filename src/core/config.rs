//! Runtime configuration loaded from environment variables
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::credentials::{resolve_api_key, SecretStore, API_KEY_VAR};
use anyhow::{anyhow, Result};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Terminal form default; stderr shares the screen
pub const TUI_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Config {
    /// Read configuration from the process environment and secret store
    pub fn from_env() -> Result<Self> {
        let store = SecretStore::from_env();
        Self::from_lookup(|name| std::env::var(name).ok(), &store)
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, store: &SecretStore) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = resolve_api_key(lookup(API_KEY_VAR), store)?;

        let timeout_secs: u64 = parse_var(&lookup, "OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let temperature: f32 = parse_var(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(anyhow!(
                "OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {temperature}"
            ));
        }

        Ok(Config {
            openai_api_key,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level: log_level_from(&lookup, DEFAULT_LOG_LEVEL),
        })
    }
}

/// Log filter from `LOG_LEVEL`, or `default` when unset or blank
pub fn log_level_from<F>(lookup: F, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_LEVEL")
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid value for {name} ('{raw}'): {e}")),
        None => Ok(default),
    }
}
