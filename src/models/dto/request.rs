use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{AnswerState, Quiz};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateQuizRequest {
    /// Source text, or `None` when absent or blank.
    pub fn source_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeQuizRequest {
    #[validate(nested)]
    pub quiz: Quiz,
    #[serde(default)]
    pub answers: AnswerState,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsePdfQuery {
    pub filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        let missing: GenerateQuizRequest = serde_json::from_str("{}").unwrap();
        let empty: GenerateQuizRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        let blank: GenerateQuizRequest = serde_json::from_str(r#"{"text": "  \n"}"#).unwrap();
        let present: GenerateQuizRequest =
            serde_json::from_str(r#"{"text": "Water is wet."}"#).unwrap();

        assert!(missing.source_text().is_none());
        assert!(empty.source_text().is_none());
        assert!(blank.source_text().is_none());
        assert_eq!(present.source_text(), Some("Water is wet."));
    }

    #[test]
    fn grade_request_validates_nested_quiz() {
        let request: GradeQuizRequest = serde_json::from_str(
            r#"{"quiz": [{"question": "Q?", "options": ["A", "B"], "answer": "Z"}], "answers": {"0": "A"}}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn grade_request_answers_default_to_empty() {
        let request: GradeQuizRequest = serde_json::from_str(
            r#"{"quiz": [{"question": "Q?", "options": ["A", "B"], "answer": "A"}]}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.answers.is_empty());
    }
}
