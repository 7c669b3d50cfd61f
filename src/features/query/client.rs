//! # Completion Client
//!
//! Seam between the query function and the hosted model. `OpenAiClient` is
//! built once at startup and shared read-only across submissions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::core::Config;
use crate::features::query::prompt::Prompt;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use openai::chat::ChatCompletion;
use openai::Credentials;
use std::time::Duration;

/// Something that turns a prompt into completion text
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier, for logging
    fn model(&self) -> &str;

    /// Send one prompt and return the plain-text completion
    async fn complete(&self, prompt: &Prompt) -> Result<String>;
}

/// OpenAI chat completions client
pub struct OpenAiClient {
    credentials: Credentials,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            credentials: Credentials::new(&config.openai_api_key, &config.openai_base_url),
            model: config.openai_model.clone(),
            temperature: config.temperature,
            timeout: config.request_timeout,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        debug!(
            "Sending chat completion (model: {}, temperature: {}, timeout: {}s)",
            self.model,
            self.temperature,
            self.timeout.as_secs()
        );

        let request = ChatCompletion::builder(&self.model, prompt.to_messages())
            .temperature(self.temperature)
            .credentials(self.credentials.clone())
            .create();

        let completion = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| anyhow!("Request timed out after {}s", self.timeout.as_secs()))??;

        extract_text(&completion)
    }
}

/// First choice's content, or an error when the model returned nothing
fn extract_text(completion: &ChatCompletion) -> Result<String> {
    completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .ok_or_else(|| anyhow!("Empty completion from model"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1/".to_string(),
            temperature: 0.3,
            request_timeout: Duration::from_secs(60),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_client_takes_settings_from_config() {
        let client = OpenAiClient::new(&test_config());
        assert_eq!(client.model(), "gpt-4o-mini");
        assert!((client.temperature() - 0.3).abs() < f32::EPSILON);
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let mut config = test_config();
        // Nothing listens on port 9 (discard) locally
        config.openai_base_url = "http://127.0.0.1:9/v1/".to_string();
        config.request_timeout = Duration::from_secs(5);

        let client = OpenAiClient::new(&config);
        let result = client.complete(&Prompt::new("sys", "user")).await;
        assert!(result.is_err());
    }

    fn completion_from_json(choices: serde_json::Value) -> ChatCompletion {
        serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 0,
            "model": "gpt-4o-mini",
            "choices": choices,
            "usage": null
        }))
        .expect("valid completion json")
    }

    #[test]
    fn test_extract_text_first_choice() {
        let completion = completion_from_json(serde_json::json!([{
            "index": 0,
            "message": { "role": "assistant", "content": "回答です" },
            "finish_reason": "stop"
        }]));
        assert_eq!(extract_text(&completion).unwrap(), "回答です");
    }

    #[test]
    fn test_no_choices_is_empty_completion() {
        let completion = completion_from_json(serde_json::json!([]));
        let err = extract_text(&completion).unwrap_err();
        assert!(err.to_string().contains("Empty completion"));
    }

    #[test]
    fn test_missing_content_is_empty_completion() {
        let completion = completion_from_json(serde_json::json!([{
            "index": 0,
            "message": { "role": "assistant", "content": null },
            "finish_reason": "stop"
        }]));
        let err = extract_text(&completion).unwrap_err();
        assert!(err.to_string().contains("Empty completion"));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        // Accepts the connection and never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let mut config = test_config();
        config.openai_base_url = format!("http://127.0.0.1:{port}/v1/");
        config.request_timeout = Duration::from_secs(1);

        let client = OpenAiClient::new(&config);
        let started = std::time::Instant::now();
        let err = client.complete(&Prompt::new("sys", "user")).await.unwrap_err();

        assert!(err.to_string().contains("timed out after 1s"));
        assert!(started.elapsed() < Duration::from_secs(10));
        server.abort();
    }
}
