use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{ParsedPdf, PdfParser, PdfParserError};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfParser;

impl LopdfParser {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<ParsedPdf, PdfParserError> {
        let document = Document::load_mem(data)
            .map_err(|e| PdfParserError::Malformed(format!("failed to parse PDF: {e}")))?;

        let pages = document.get_pages();
        let mut page_texts = Vec::with_capacity(pages.len());

        for page_number in pages.keys() {
            let text = document.extract_text(&[*page_number]).map_err(|e| {
                tracing::error!(page_number, error = %e, "Page text extraction failed");
                PdfParserError::ExtractionFailed(format!("page {page_number}: {e}"))
            })?;
            page_texts.push(text);
        }

        Ok(ParsedPdf { page_texts })
    }
}

#[async_trait]
impl PdfParser for LopdfParser {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn parse(&self, data: &[u8]) -> Result<ParsedPdf, PdfParserError> {
        let owned = data.to_vec();

        let parsed = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| PdfParserError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| PdfParserError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = parsed.page_count(), "PDF text extraction complete");
        Ok(parsed)
    }
}
