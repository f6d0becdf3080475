use async_trait::async_trait;

#[async_trait]
pub trait PdfParser: Send + Sync {
    async fn parse(&self, data: &[u8]) -> Result<ParsedPdf, PdfParserError>;
}

/// Text of every page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPdf {
    pub page_texts: Vec<String>,
}

impl ParsedPdf {
    pub fn page_count(&self) -> usize {
        self.page_texts.len()
    }

    pub fn concatenated_text(&self) -> String {
        self.page_texts.concat()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PdfParserError {
    #[error("malformed pdf: {0}")]
    Malformed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
