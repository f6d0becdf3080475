use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};

use super::prompt::build_prompt;
use super::token_bucket::TokenBucket;
use super::token_counter::estimate_tokens;

/// Asks the model about a document, charging the answer against the token bucket.
pub struct LlmGateway {
    llm_client: Arc<dyn LlmClient>,
    token_bucket: Arc<TokenBucket>,
}

impl LlmGateway {
    pub fn new(llm_client: Arc<dyn LlmClient>, token_bucket: Arc<TokenBucket>) -> Self {
        Self {
            llm_client,
            token_bucket,
        }
    }

    #[tracing::instrument(
        skip(self, document_text, question),
        fields(document_chars = document_text.len(), question_chars = question.len())
    )]
    pub async fn answer(&self, document_text: &str, question: &str) -> Result<String, GatewayError> {
        let prompt = build_prompt(document_text, question);

        let completion = self.llm_client.generate(&prompt).await.map_err(|e| match e {
            LlmClientError::MissingApiKey => {
                tracing::error!("LLM API key is not configured");
                GatewayError::Configuration(e.to_string())
            }
            other => {
                tracing::error!(error = %other, "LLM request failed");
                GatewayError::Upstream(other)
            }
        })?;

        let tokens_used = completion
            .output_tokens
            .map(|t| t as usize)
            .unwrap_or_else(|| estimate_tokens(&completion.text));
        let charge = u32::try_from(tokens_used).unwrap_or(u32::MAX);

        if !self.token_bucket.consume(charge) {
            tracing::warn!(tokens_used, "Token limit exceeded");
            return Err(GatewayError::RateLimited);
        }

        tracing::info!(tokens_used, "LLM answer generated");
        Ok(completion.text.trim().to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Token limit exceeded")]
    RateLimited,
    #[error("LLM configuration error: {0}")]
    Configuration(String),
    #[error("LLM request failed: {0}")]
    Upstream(LlmClientError),
}
