use std::env;
use std::str::FromStr;

use secrecy::SecretString;

use crate::services::key_points::KeyPointPolicy;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_PDF_PAGES: usize = 10;
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 4000;
pub const DEFAULT_PASS_THRESHOLD: u32 = 3;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: Option<SecretString>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub upstream_timeout_secs: u64,
    pub max_pdf_pages: usize,
    pub max_prompt_chars: usize,
    pub pass_threshold: u32,
    pub key_point_policy: KeyPointPolicy,
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT").unwrap_or(8080),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            upstream_timeout_secs: parse_env("UPSTREAM_TIMEOUT_SECS").unwrap_or(60),
            max_pdf_pages: parse_env("MAX_PDF_PAGES").unwrap_or(DEFAULT_MAX_PDF_PAGES),
            max_prompt_chars: parse_env("MAX_PROMPT_CHARS").unwrap_or(DEFAULT_MAX_PROMPT_CHARS),
            pass_threshold: parse_env("PASS_THRESHOLD").unwrap_or(DEFAULT_PASS_THRESHOLD),
            key_point_policy: parse_env("KEY_POINT_STRATEGY").unwrap_or_default(),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// Logs a warning for settings that leave an endpoint unusable.
    /// A missing key is not fatal: the generate route answers with a configuration error.
    pub fn warn_if_incomplete(&self) {
        if self.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; quiz generation will be unavailable");
        }
        if self.max_pdf_pages == 0 {
            log::warn!("MAX_PDF_PAGES is 0; every uploaded PDF will be rejected");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            upstream_timeout_secs: 5,
            max_pdf_pages: DEFAULT_MAX_PDF_PAGES,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            key_point_policy: KeyPointPolicy::Sentence,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
