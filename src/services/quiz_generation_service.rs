use std::sync::Arc;

use crate::{
    config::Config,
    constants::quiz_prompt::{quiz_user_prompt, QUIZ_SYSTEM_PROMPT, QUIZ_TEMPERATURE},
    errors::{AppError, AppResult},
    models::domain::Quiz,
    services::{
        completion_client::{ChatCompletionRequest, ChatMessage, CompletionClient, OpenAiClient},
        in_flight::InFlightGuard,
    },
};

/// Turns source text into a validated quiz through the completion API.
pub struct QuizGenerationService {
    client: Option<Arc<dyn CompletionClient>>,
    model: String,
    max_prompt_chars: usize,
    in_flight: InFlightGuard,
}

impl QuizGenerationService {
    pub fn new(
        client: Option<Arc<dyn CompletionClient>>,
        model: impl Into<String>,
        max_prompt_chars: usize,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            max_prompt_chars,
            in_flight: InFlightGuard::new(),
        }
    }

    /// Builds the service with an OpenAI client when a key is configured.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = match &config.openai_api_key {
            Some(key) => {
                let client = OpenAiClient::new(
                    key.clone(),
                    &config.openai_base_url,
                    config.upstream_timeout_secs,
                )?;
                Some(Arc::new(client) as Arc<dyn CompletionClient>)
            }
            None => None,
        };

        Ok(Self::new(
            client,
            config.openai_model.clone(),
            config.max_prompt_chars,
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn in_flight(&self) -> &InFlightGuard {
        &self.in_flight
    }

    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(QUIZ_SYSTEM_PROMPT),
                ChatMessage::user(quiz_user_prompt(truncate_chars(text, self.max_prompt_chars))),
            ],
            temperature: QUIZ_TEMPERATURE,
        }
    }

    /// Returns the model's raw quiz JSON once it has been validated. `caller`
    /// identifies the client whose generation slot the request occupies.
    pub async fn generate_quiz(&self, caller: &str, text: &str) -> AppResult<String> {
        if text.trim().is_empty() {
            return Err(AppError::InputMissing("No text provided.".to_string()));
        }

        let client = self.client.as_ref().ok_or_else(|| {
            log::error!("OPENAI_API_KEY is not set");
            AppError::ConfigMissing("API key not found.".to_string())
        })?;

        let _permit = self.in_flight.try_begin(caller)?;

        log::info!(
            "Requesting quiz for {} ({} chars of source text, window {})",
            caller,
            text.chars().count(),
            self.max_prompt_chars
        );
        let raw = client.complete(self.build_request(text)).await?;

        let quiz = Quiz::parse(&raw).map_err(|e| {
            log::error!("Model returned an unusable quiz: {}", e);
            e
        })?;
        log::info!("Generated quiz with {} questions", quiz.len());

        Ok(raw)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
