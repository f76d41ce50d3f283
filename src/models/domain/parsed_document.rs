use serde::{Deserialize, Serialize};

/// Result of extracting an uploaded PDF. Built once per upload and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

impl ParsedDocument {
    pub fn parsed(text: String, key_points: Vec<String>, page_count: usize) -> Self {
        ParsedDocument {
            success: true,
            message: None,
            text: Some(text),
            key_points: Some(key_points),
            page_count: Some(page_count),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ParsedDocument {
            success: false,
            message: Some(message.into()),
            text: None,
            key_points: None,
            page_count: None,
        }
    }
}
