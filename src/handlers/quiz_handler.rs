use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuizRequest, GradeQuizRequest},
        response::GenerateQuizResponse,
    },
    services::quiz_attempt_service::QuizAttemptService,
};

pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Key for the caller's generation slot: the `x-client-id` header when sent,
/// otherwise the client address (`Forwarded` / `X-Forwarded-For` aware).
pub fn caller_key(req: &HttpRequest) -> String {
    req.headers()
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| req.connection_info().realip_remote_addr().map(str::to_string))
        .unwrap_or_else(|| "anonymous".to_string())
}

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let text = request
        .source_text()
        .ok_or_else(|| AppError::InputMissing("No text provided.".to_string()))?;

    let caller = caller_key(&req);
    let quiz = state
        .quiz_generation_service
        .generate_quiz(&caller, text)
        .await
        .map_err(|err| {
            log::warn!(
                "[{}] Quiz generation for {} failed: {}",
                get_request_id(&req).unwrap_or_default(),
                caller,
                err
            );
            err
        })?;
    Ok(HttpResponse::Ok().json(GenerateQuizResponse { quiz }))
}

#[post("/api/grade-quiz")]
pub async fn grade_quiz(
    state: web::Data<AppState>,
    request: web::Json<GradeQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let report = QuizAttemptService::grade(
        &request.quiz,
        &request.answers,
        state.config.pass_threshold,
    );
    log::info!(
        "Graded quiz: {}/{} ({:?})",
        report.score,
        report.total,
        report.outcome
    );
    Ok(HttpResponse::Ok().json(report))
}
