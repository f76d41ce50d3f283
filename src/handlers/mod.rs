pub mod document_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{
    error::{JsonPayloadError, PayloadError},
    web,
};

use crate::{app_state::AppState, errors::AppError};

pub use document_handler::parse_pdf;
pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, grade_quiz};

/// Maps JSON extractor failures onto the API's `{"error"}` responses:
/// oversized bodies are 413, non-JSON content types 415, anything else 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            log::warn!("Rejected JSON body: {}", err);
            json_error(err).into()
        })
}

fn json_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            AppError::PayloadTooLarge(err.to_string())
        }
        JsonPayloadError::Payload(PayloadError::Overflow) => {
            AppError::PayloadTooLarge(err.to_string())
        }
        JsonPayloadError::ContentType => AppError::UnsupportedMediaType(err.to_string()),
        other => AppError::InputMissing(format!("Invalid request body: {}", other)),
    }
}

/// Registers state, extractor limits and every route.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let max_upload_bytes = state.config.max_upload_bytes;
        cfg.app_data(web::Data::new(state))
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .app_data(json_config(max_upload_bytes))
            .service(health_check)
            .service(parse_pdf)
            .service(generate_quiz)
            .service(grade_quiz);
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::configure;
    use crate::test_utils::test_helpers::test_state;

    #[actix_web::test]
    async fn test_oversized_json_body_is_payload_too_large() {
        let mut state = test_state(None);
        let mut config = (*state.config).clone();
        config.max_upload_bytes = 64;
        state.config = std::sync::Arc::new(config);
        let app = test::init_service(App::new().configure(configure(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/generate-quiz")
            .set_json(json!({ "text": "x".repeat(500) }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Request body is too large"));
    }

    #[actix_web::test]
    async fn test_non_json_content_type_is_unsupported_media_type() {
        let app = test::init_service(App::new().configure(configure(test_state(None)))).await;

        let req = test::TestRequest::post()
            .uri("/api/generate-quiz")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"text": "Water is a compound."}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(App::new().configure(configure(test_state(None)))).await;

        let req = test::TestRequest::post()
            .uri("/api/generate-quiz")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Invalid request body"));
    }
}
