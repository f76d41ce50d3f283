use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let quiz_generation = if state.quiz_generation_service.is_configured() {
        "configured"
    } else {
        "missing_api_key"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        quiz_generation,
    })
}
