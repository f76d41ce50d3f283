use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    InputMissing(String),

    #[error("Unsupported file type: {0}. Only .pdf files are accepted.")]
    UnsupportedFileType(String),

    #[error("PDF has more than {limit} pages.")]
    DocumentTooLarge { pages: usize, limit: usize },

    // Detail is logged, never surfaced.
    #[error("Error parsing PDF")]
    ParseFailure(String),

    #[error("Server configuration error: {0}")]
    ConfigMissing(String),

    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    #[error("Server error: Failed to connect to OpenAI.")]
    NetworkFailure(String),

    #[error("Quiz response was malformed: {0}")]
    ResponseMalformed(String),

    #[error("Request body is too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("A quiz is already being generated. Please wait.")]
    RequestInFlight,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InputMissing(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType(_) => StatusCode::BAD_REQUEST,
            AppError::DocumentTooLarge { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ParseFailure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::NetworkFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ResponseMalformed(_) => StatusCode::BAD_GATEWAY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::RequestInFlight => StatusCode::TOO_MANY_REQUESTS,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
