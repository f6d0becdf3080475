use std::sync::Arc;

use crate::application::ports::{
    DocumentRepository, PdfParser, PdfParserError, RepositoryError, UploadStore, UploadStoreError,
};
use crate::domain::{DocumentId, NewDocument, StoredFile};

use super::text_normalizer::TextNormalizer;

const PDF_EXTENSION: &str = ".pdf";

#[derive(Debug, Clone, Copy)]
pub struct IngestionLimits {
    pub max_pdf_size_bytes: usize,
    pub max_char_length: usize,
}

/// Validates, stores, extracts and normalizes uploaded PDFs.
pub struct IngestionService {
    upload_store: Arc<dyn UploadStore>,
    pdf_parser: Arc<dyn PdfParser>,
    normalizer: Arc<TextNormalizer>,
    document_repository: Arc<dyn DocumentRepository>,
    limits: IngestionLimits,
}

impl IngestionService {
    pub fn new(
        upload_store: Arc<dyn UploadStore>,
        pdf_parser: Arc<dyn PdfParser>,
        normalizer: Arc<TextNormalizer>,
        document_repository: Arc<dyn DocumentRepository>,
        limits: IngestionLimits,
    ) -> Self {
        Self {
            upload_store,
            pdf_parser,
            normalizer,
            document_repository,
            limits,
        }
    }

    pub fn limits(&self) -> IngestionLimits {
        self.limits
    }

    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn ingest(&self, filename: &str, data: &[u8]) -> Result<DocumentId, IngestionError> {
        validate_pdf_filename(filename)?;
        validate_pdf_size(data.len(), self.limits.max_pdf_size_bytes)?;

        let stored = self.upload_store.save(filename, data).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to write uploaded PDF");
            IngestionError::Storage(e)
        })?;
        tracing::info!(path = %stored, "Uploaded PDF written");

        match self.process(&stored, filename, data).await {
            Ok(id) => {
                tracing::info!(document_id = %id, path = %stored, "PDF ingested");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %stored, "Rejected PDF after storing it");
                self.discard(&stored).await;
                Err(e)
            }
        }
    }

    async fn process(
        &self,
        stored: &StoredFile,
        original_filename: &str,
        data: &[u8],
    ) -> Result<DocumentId, IngestionError> {
        let parsed = self.pdf_parser.parse(data).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse PDF");
            IngestionError::Parsing {
                filename: original_filename.to_string(),
                source: e,
            }
        })?;

        let page_count = parsed.page_count();
        if page_count == 0 {
            return Err(IngestionError::NoPages);
        }

        let raw_text = parsed.concatenated_text();
        if raw_text.is_empty() {
            return Err(IngestionError::NoText);
        }

        let normalized = self.normalizer.normalize(&raw_text);
        let length = normalized.chars().count();
        tracing::debug!(
            page_count,
            raw_chars = raw_text.len(),
            normalized_chars = length,
            "PDF text normalized"
        );

        if normalized.is_empty() {
            return Err(IngestionError::NoText);
        }

        if length > self.limits.max_char_length {
            return Err(IngestionError::TextTooLong {
                length,
                max: self.limits.max_char_length,
            });
        }

        let document = NewDocument {
            filename: stored.filename().to_string(),
            original_filename: original_filename.to_string(),
            file_path: stored.path_string(),
            page_count: u32::try_from(page_count).unwrap_or(u32::MAX),
            size_kb: NewDocument::size_kb_from_bytes(data.len()),
            extracted_text: normalized,
        };

        self.document_repository
            .create(&document)
            .await
            .map_err(IngestionError::Repository)
    }

    async fn discard(&self, stored: &StoredFile) {
        match self.upload_store.delete(stored).await {
            Ok(()) => tracing::info!(path = %stored, "Deleted rejected upload"),
            Err(e) => tracing::error!(error = %e, path = %stored, "Failed to delete rejected upload"),
        }
    }
}

pub fn validate_pdf_filename(filename: &str) -> Result<(), IngestionError> {
    if filename.ends_with(PDF_EXTENSION) {
        Ok(())
    } else {
        tracing::warn!(filename, "Rejected non-PDF file");
        Err(IngestionError::InvalidFileType)
    }
}

pub fn validate_pdf_size(size: usize, max: usize) -> Result<(), IngestionError> {
    if size <= max {
        Ok(())
    } else {
        tracing::warn!(size, max, "Rejected oversized PDF");
        Err(IngestionError::FileTooLarge { size, max })
    }
}

fn bytes_as_mb(bytes: &usize) -> f64 {
    *bytes as f64 / 1024.0 / 1024.0
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("Only PDF files are accepted.")]
    InvalidFileType,
    #[error(
        "PDF file size exceeds the maximum allowed size of {:.2} MB (got {size} bytes)",
        bytes_as_mb(.max)
    )]
    FileTooLarge { size: usize, max: usize },
    #[error("The PDF file has no pages")]
    NoPages,
    #[error("No text could be extracted from the PDF")]
    NoText,
    #[error("Processed text exceeds maximum character length of {max} (got {length})")]
    TextTooLong { length: usize, max: usize },
    #[error("Error processing PDF file '{filename}': {source}")]
    Parsing {
        filename: String,
        source: PdfParserError,
    },
    #[error("Error storing PDF file: {0}")]
    Storage(UploadStoreError),
    #[error("Error saving PDF to document store: {0}")]
    Repository(RepositoryError),
}

impl IngestionError {
    /// Whether the upload itself was at fault, as opposed to a failing dependency.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IngestionError::InvalidFileType
                | IngestionError::FileTooLarge { .. }
                | IngestionError::NoPages
                | IngestionError::NoText
                | IngestionError::TextTooLong { .. }
        )
    }
}
