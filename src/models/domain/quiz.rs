use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_answer_in_options"))]
pub struct QuizItem {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(length(min = 2, message = "a question needs at least two options"))]
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizItem {
    pub fn new(question: &str, options: &[&str], answer: &str) -> Self {
        QuizItem {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

fn validate_answer_in_options(item: &QuizItem) -> Result<(), ValidationError> {
    if item.has_option(&item.answer) {
        return Ok(());
    }
    let mut err = ValidationError::new("answer_not_in_options");
    err.message = Some(Cow::from(format!(
        "answer '{}' is not one of the options for '{}'",
        item.answer, item.question
    )));
    Err(err)
}

/// An ordered sequence of quiz items, serialized as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(transparent)]
pub struct Quiz {
    #[validate(length(min = 1, message = "quiz has no questions"), nested)]
    pub items: Vec<QuizItem>,
}

impl Quiz {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Quiz { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    /// Parses and validates raw model output into a quiz.
    ///
    /// Accepts a bare JSON array, optionally wrapped in a Markdown code fence,
    /// or an object whose only array-valued field holds the items.
    pub fn parse(raw: &str) -> AppResult<Quiz> {
        let body = strip_code_fence(raw);
        let value: Value = serde_json::from_str(body)
            .map_err(|e| AppError::ResponseMalformed(format!("not valid JSON: {}", e)))?;

        let items = match value {
            Value::Array(items) => Value::Array(items),
            Value::Object(map) => {
                let mut arrays = map.into_iter().filter(|(_, v)| v.is_array());
                match (arrays.next(), arrays.next()) {
                    (Some((_, items)), None) => items,
                    _ => {
                        return Err(AppError::ResponseMalformed(
                            "expected a JSON array of quiz items".to_string(),
                        ))
                    }
                }
            }
            _ => {
                return Err(AppError::ResponseMalformed(
                    "expected a JSON array of quiz items".to_string(),
                ))
            }
        };

        let quiz: Quiz = serde_json::from_value(items)
            .map_err(|e| AppError::ResponseMalformed(format!("invalid quiz item: {}", e)))?;
        quiz.validate()
            .map_err(|e| AppError::ResponseMalformed(e.to_string()))?;
        Ok(quiz)
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
        {"question": "What is H2O?", "options": ["Water", "Salt"], "answer": "Water"},
        {"question": "Boiling point?", "options": ["50C", "100C", "150C"], "answer": "100C"}
    ]"#;

    #[test]
    fn parse_accepts_bare_array() {
        let quiz = Quiz::parse(VALID).expect("quiz should parse");
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.items[1].answer, "100C");
    }

    #[test]
    fn parse_accepts_fenced_json() {
        let fenced = format!("```json\n{}\n```", VALID);
        let quiz = Quiz::parse(&fenced).expect("fenced quiz should parse");
        assert_eq!(quiz.len(), 2);
    }

    #[test]
    fn parse_accepts_single_array_wrapper_object() {
        let wrapped = format!(r#"{{"questions": {}}}"#, VALID);
        let quiz = Quiz::parse(&wrapped).expect("wrapped quiz should parse");
        assert_eq!(quiz.len(), 2);
    }

    #[test]
    fn parse_rejects_non_json() {
        let err = Quiz::parse("Sure! Here is your quiz:").unwrap_err();
        assert!(matches!(err, AppError::ResponseMalformed(_)));
    }

    #[test]
    fn parse_rejects_answer_outside_options() {
        let raw = r#"[{"question": "Q?", "options": ["A", "B"], "answer": "C"}]"#;
        let err = Quiz::parse(raw).unwrap_err();
        assert!(matches!(err, AppError::ResponseMalformed(_)));
    }

    #[test]
    fn parse_rejects_single_option() {
        let raw = r#"[{"question": "Q?", "options": ["A"], "answer": "A"}]"#;
        assert!(matches!(
            Quiz::parse(raw),
            Err(AppError::ResponseMalformed(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_fields_and_empty_quiz() {
        assert!(Quiz::parse(r#"[{"question": "Q?", "options": ["A", "B"]}]"#).is_err());
        assert!(Quiz::parse("[]").is_err());
    }

    #[test]
    fn quiz_serializes_as_bare_array() {
        let quiz = Quiz::new(vec![QuizItem::new("Q?", &["A", "B"], "A")]);
        let json = serde_json::to_value(&quiz).expect("quiz should serialize");
        assert!(json.is_array());
    }
}
