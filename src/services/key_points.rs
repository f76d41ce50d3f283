//! Heuristic key-point extraction.
//!
//! Both policies are best-effort. Callers depend only on [`KeyPointStrategy`],
//! so a policy can be swapped through configuration without touching them.

use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

pub const TOKEN_KEY_POINT_LIMIT: usize = 25;
pub const SENTENCE_KEY_POINT_LIMIT: usize = 10;
pub const MIN_SENTENCE_CHARS: usize = 20;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]").expect("NUMBERED_MARKER is a valid regex pattern"));

static DEFINITIONAL_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(is|are|means|refers to|defined as|caused by|due to)\b")
        .expect("DEFINITIONAL_CUE is a valid regex pattern")
});

pub trait KeyPointStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract_key_points(&self, text: &str) -> Vec<String>;
}

/// Keeps numbered-list markers ("1.", "2)") and all-caps tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenKeyPoints;

impl TokenKeyPoints {
    fn is_key_token(token: &str) -> bool {
        NUMBERED_MARKER.is_match(token) || is_upper_case_word(token)
    }
}

impl KeyPointStrategy for TokenKeyPoints {
    fn name(&self) -> &'static str {
        "token"
    }

    fn extract_key_points(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|token| Self::is_key_token(token))
            .take(TOKEN_KEY_POINT_LIMIT)
            .map(str::to_string)
            .collect()
    }
}

/// Keeps definitional sentences ("X is Y", "X refers to Y", ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceKeyPoints;

impl KeyPointStrategy for SentenceKeyPoints {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn extract_key_points(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
            .filter(|s| DEFINITIONAL_CUE.is_match(s))
            .take(SENTENCE_KEY_POINT_LIMIT)
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPointPolicy {
    Token,
    #[default]
    Sentence,
}

impl KeyPointPolicy {
    pub fn strategy(self) -> Arc<dyn KeyPointStrategy> {
        match self {
            KeyPointPolicy::Token => Arc::new(TokenKeyPoints),
            KeyPointPolicy::Sentence => Arc::new(SentenceKeyPoints),
        }
    }
}

impl FromStr for KeyPointPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(KeyPointPolicy::Token),
            "sentence" => Ok(KeyPointPolicy::Sentence),
            other => Err(format!("unknown key point strategy '{}'", other)),
        }
    }
}

/// At least one letter and no lower-case letters; digits and punctuation may
/// appear alongside ("H2O", "100C").
fn is_upper_case_word(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// Splits after `.`, `!` or `?` when whitespace and then a capital letter follow.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = idx + c.len_utf8();
        let rest = &text[end..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            continue;
        }
        if trimmed.chars().next().is_some_and(char::is_uppercase) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
