use actix_web::{post, web, HttpRequest, HttpResponse, ResponseError};

use crate::{
    app_state::AppState,
    errors::AppResult,
    middleware::get_request_id,
    models::{domain::ParsedDocument, dto::request::ParsePdfQuery},
    services::pdf_service::PdfService,
};

/// Accepts raw PDF bytes. Failures are still answered with a `ParsedDocument`
/// body (`success: false`) so clients handle a single shape.
#[post("/api/parse-pdf")]
pub async fn parse_pdf(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ParsePdfQuery>,
    body: web::Bytes,
) -> HttpResponse {
    match extract(&state, query.into_inner(), body).await {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(err) => {
            log::warn!(
                "[{}] PDF upload rejected: {:?}",
                get_request_id(&req).unwrap_or_default(),
                err
            );
            HttpResponse::build(err.status_code()).json(ParsedDocument::failed(err.to_string()))
        }
    }
}

async fn extract(state: &AppState, query: ParsePdfQuery, body: web::Bytes) -> AppResult<ParsedDocument> {
    if let Some(file_name) = query.filename.as_deref() {
        PdfService::check_file_name(file_name)?;
    }

    let service = state.pdf_service.clone();
    web::block(move || service.extract(&body)).await?
}
