use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{pdf_service::PdfService, quiz_generation_service::QuizGenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub pdf_service: Arc<PdfService>,
    pub quiz_generation_service: Arc<QuizGenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let pdf_service = Arc::new(PdfService::from_config(&config));
        log::info!(
            "PDF extraction: max {} pages, {} key points",
            config.max_pdf_pages,
            pdf_service.strategy_name()
        );

        let quiz_generation_service = Arc::new(QuizGenerationService::from_config(&config)?);

        Ok(Self {
            pdf_service,
            quiz_generation_service,
            config: Arc::new(config),
        })
    }
}
