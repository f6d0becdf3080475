mod clock;
mod document_repository;
mod llm_client;
mod pdf_parser;
mod repository_error;
mod tokenizer;
mod upload_store;

pub use clock::Clock;
pub use document_repository::DocumentRepository;
pub use llm_client::{Completion, LlmClient, LlmClientError};
pub use pdf_parser::{ParsedPdf, PdfParser, PdfParserError};
pub use repository_error::RepositoryError;
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use upload_store::{UploadStore, UploadStoreError};
