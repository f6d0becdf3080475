use std::sync::Arc;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::DocumentId;

use super::llm_gateway::{GatewayError, LlmGateway};

pub struct ChatService {
    document_repository: Arc<dyn DocumentRepository>,
    gateway: Arc<LlmGateway>,
}

impl ChatService {
    pub fn new(document_repository: Arc<dyn DocumentRepository>, gateway: Arc<LlmGateway>) -> Self {
        Self {
            document_repository,
            gateway,
        }
    }

    /// Answers `message` using the stored text of document `pdf_id`.
    #[tracing::instrument(skip(self, message), fields(message_chars = message.len()))]
    pub async fn chat(&self, pdf_id: &str, message: &str) -> Result<String, ChatError> {
        let Ok(id) = pdf_id.parse::<DocumentId>() else {
            tracing::warn!("Malformed document id");
            return Err(ChatError::NotFound(pdf_id.to_string()));
        };

        let document = self
            .document_repository
            .get_by_id(id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to load document");
                ChatError::Repository(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("Document not found");
                ChatError::NotFound(pdf_id.to_string())
            })?;

        if message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }

        if document.extracted_text.trim().is_empty() {
            tracing::error!(document_id = %id, "Stored document has no extracted text");
            return Err(ChatError::EmptyDocumentText);
        }

        let answer = self
            .gateway
            .answer(&document.extracted_text, message)
            .await?;

        tracing::info!(document_id = %id, answer_chars = answer.len(), "Chat request answered");
        Ok(answer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("PDF with ID {0} not found")]
    NotFound(String),
    #[error("Message is required")]
    MissingMessage,
    #[error("Extracted text is empty for the given PDF")]
    EmptyDocumentText,
    #[error("Error loading PDF from document store: {0}")]
    Repository(RepositoryError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
