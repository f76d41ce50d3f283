use std::sync::Arc;

use lopdf::Document;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::ParsedDocument,
    services::key_points::KeyPointStrategy,
};

/// Extracts plain text and key points from uploaded PDFs.
pub struct PdfService {
    max_pages: usize,
    strategy: Arc<dyn KeyPointStrategy>,
}

impl PdfService {
    pub fn new(max_pages: usize, strategy: Arc<dyn KeyPointStrategy>) -> Self {
        Self {
            max_pages,
            strategy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_pdf_pages, config.key_point_policy.strategy())
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Accepts only file names with a `.pdf` extension, case-insensitively.
    pub fn check_file_name(file_name: &str) -> AppResult<()> {
        let is_pdf = file_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            Ok(())
        } else {
            Err(AppError::UnsupportedFileType(file_name.to_string()))
        }
    }

    /// Rejects over-long documents before reading any page text. Pages are
    /// read in document order; each page's items are space-joined and every
    /// page ends with a newline.
    pub fn extract(&self, bytes: &[u8]) -> AppResult<ParsedDocument> {
        if bytes.is_empty() {
            return Err(AppError::InputMissing("No file provided.".to_string()));
        }

        let document = Document::load_mem(bytes).map_err(|e| {
            log::error!("Failed to load PDF: {}", e);
            AppError::ParseFailure(e.to_string())
        })?;

        let pages = document.get_pages();
        if pages.len() > self.max_pages {
            log::info!(
                "Rejected PDF with {} pages (limit {})",
                pages.len(),
                self.max_pages
            );
            return Err(AppError::DocumentTooLarge {
                pages: pages.len(),
                limit: self.max_pages,
            });
        }

        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = document.extract_text(&[*page_number]).map_err(|e| {
                log::error!("Failed to extract text from page {}: {}", page_number, e);
                AppError::ParseFailure(e.to_string())
            })?;
            text.push_str(&join_text_items(&page_text));
            text.push('\n');
        }

        let key_points = self.extract_key_points(&text);
        log::debug!(
            "Extracted {} chars and {} key points ({}) from {} pages",
            text.len(),
            key_points.len(),
            self.strategy.name(),
            pages.len()
        );

        Ok(ParsedDocument::parsed(text, key_points, pages.len()))
    }

    pub fn extract_key_points(&self, text: &str) -> Vec<String> {
        self.strategy.extract_key_points(text)
    }
}

fn join_text_items(page_text: &str) -> String {
    page_text.split_whitespace().collect::<Vec<_>>().join(" ")
}
