//! API key resolution
//!
//! The key comes from the `OPENAI_API_KEY` environment variable first, then
//! from the secret store (a YAML file). Missing both is fatal at startup.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{bail, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const SECRETS_PATH_VAR: &str = "EXPERT_HELPER_SECRETS_PATH";
pub const DEFAULT_SECRETS_PATH: &str = "secrets.yaml";

/// Shown before exiting when no key can be found
pub const MISSING_KEY_HELP: &str = "OPENAI_API_KEY が未設定です。\n\
    ・ローカル: ターミナルで `export OPENAI_API_KEY=sk-...` を実行するか、.env に `OPENAI_API_KEY=sk-...` を記載\n\
    ・シークレットストア: secrets.yaml（または EXPERT_HELPER_SECRETS_PATH で指定したファイル）に `OPENAI_API_KEY: \"sk-...\"` を保存";

/// Key/value secrets loaded from a YAML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SecretStore {
    secrets: HashMap<String, String>,
}

impl SecretStore {
    /// Load the store from a YAML mapping file.
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No secret store at {}", path.display());
            return Self::default();
        }

        match Self::parse_file(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("Ignoring unreadable secret store {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Load from `EXPERT_HELPER_SECRETS_PATH`, or `secrets.yaml`
    pub fn from_env() -> Self {
        let path = std::env::var(SECRETS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_PATH));
        Self::load(&path)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let store: Option<SecretStore> = serde_yaml::from_str(contents)?;
        Ok(store.unwrap_or_default())
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.secrets.get(name).map(String::as_str)
    }
}

/// Pick the API key: non-blank environment value first, then the store.
pub fn resolve_api_key(env_value: Option<String>, store: &SecretStore) -> Result<String> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        debug!("Using {API_KEY_VAR} from environment");
        return Ok(key.trim().to_string());
    }

    if let Some(key) = store.get(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
        debug!("Using {API_KEY_VAR} from secret store");
        return Ok(key.trim().to_string());
    }

    bail!(MISSING_KEY_HELP)
}
