#[cfg(test)]
pub mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use crate::models::domain::{AnswerState, Quiz, QuizItem};

    pub const FIVE_ITEM_QUIZ_JSON: &str = r#"[
        {"question": "What is water made of?", "options": ["H2O", "CO2", "NaCl"], "answer": "H2O"},
        {"question": "At what temperature does water boil at sea level?", "options": ["50C", "100C"], "answer": "100C"},
        {"question": "What does heat refer to?", "options": ["Energy transfer", "Mass", "Charge"], "answer": "Energy transfer"},
        {"question": "Which state is ice?", "options": ["Solid", "Liquid", "Gas"], "answer": "Solid"},
        {"question": "What is steam?", "options": ["Water vapour", "Smoke"], "answer": "Water vapour"}
    ]"#;

    /// Standard five-question quiz.
    pub fn five_item_quiz() -> Quiz {
        Quiz::parse(FIVE_ITEM_QUIZ_JSON).expect("fixture quiz is valid")
    }

    /// Answers the first `correct` questions correctly and the rest wrongly.
    pub fn answers_with_correct(quiz: &Quiz, correct: usize) -> AnswerState {
        quiz.items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let choice = if idx < correct {
                    item.answer.clone()
                } else {
                    wrong_option(item)
                };
                (idx, choice)
            })
            .collect()
    }

    fn wrong_option(item: &QuizItem) -> String {
        item.options
            .iter()
            .find(|o| **o != item.answer)
            .cloned()
            .expect("fixture items have a wrong option")
    }

    /// Builds an in-memory PDF with one line of text per page.
    pub fn sample_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), Object::Integer(12)]),
                    Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content should encode"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(page_texts.len() as i64),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf should serialize");
        bytes
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState,
        config::Config,
        services::{
            completion_client::CompletionClient, pdf_service::PdfService,
            quiz_generation_service::QuizGenerationService,
        },
    };

    /// App state wired with the given completion client, or none at all.
    pub fn test_state(client: Option<Arc<dyn CompletionClient>>) -> AppState {
        let config = Config::test_config();
        AppState {
            pdf_service: Arc::new(PdfService::from_config(&config)),
            quiz_generation_service: Arc::new(QuizGenerationService::new(
                client,
                config.openai_model.clone(),
                config.max_prompt_chars,
            )),
            config: Arc::new(config),
        }
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_attempt_service::QuizAttemptService;

    #[test]
    fn test_fixtures_five_item_quiz() {
        let quiz = five_item_quiz();
        assert_eq!(quiz.len(), 5);
    }

    #[test]
    fn test_fixtures_answers_with_correct() {
        let quiz = five_item_quiz();
        for correct in 0..=5 {
            let answers = answers_with_correct(&quiz, correct);
            assert_eq!(answers.len(), 5);
            assert_eq!(QuizAttemptService::score(&quiz, &answers), correct as u32);
        }
    }

    #[test]
    fn test_fixtures_sample_pdf_has_header() {
        let bytes = sample_pdf(&["Hello"]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }
}
