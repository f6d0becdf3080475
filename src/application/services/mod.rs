mod chat_service;
mod ingestion_service;
mod llm_gateway;
mod prompt;
mod text_normalizer;
mod token_bucket;
mod token_counter;

pub use chat_service::{ChatError, ChatService};
pub use ingestion_service::{
    IngestionError, IngestionLimits, IngestionService, validate_pdf_filename, validate_pdf_size,
};
pub use llm_gateway::{GatewayError, LlmGateway};
pub use prompt::build_prompt;
pub use text_normalizer::TextNormalizer;
pub use token_bucket::TokenBucket;
pub use token_counter::estimate_tokens;
