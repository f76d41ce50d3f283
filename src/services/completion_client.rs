use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

const DEFAULT_UPSTREAM_ERROR: &str = "An unknown error occurred with the OpenAI API.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Seam between quiz generation and the hosted chat-completion API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one completion request and returns the first choice's content.
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String>;
}

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenAiClient {
    pub fn new(api_key: SecretString, base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String> {
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Server-side fetch error: {}", e);
                AppError::NetworkFailure(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read completion response body: {}", e);
            AppError::NetworkFailure(e.to_string())
        })?;

        interpret_completion(status, &body)
    }
}

/// Maps an upstream status and body to the first choice's content, relaying
/// upstream failures with their own status and message.
pub fn interpret_completion(status: u16, body: &str) -> AppResult<String> {
    if !(200..300).contains(&status) {
        log::error!("OpenAI API error ({}): {}", status, body);
        let message = serde_json::from_str::<UpstreamErrorBody>(body)
            .unwrap_or_default()
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| DEFAULT_UPSTREAM_ERROR.to_string());
        let status = if status == 0 { 500 } else { status };
        return Err(AppError::UpstreamError { status, message });
    }

    let completion: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Unreadable completion response: {}", e);
        AppError::ResponseMalformed(format!("unreadable completion response: {}", e))
    })?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::ResponseMalformed("completion had no content".to_string()))
}
