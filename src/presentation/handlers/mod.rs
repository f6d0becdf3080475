mod chat;
mod error;
mod health;
mod upload;

pub use chat::{ChatRequest, ChatResponse, chat_handler};
pub use error::{ApiError, ErrorResponse, not_found_handler};
pub use health::{HealthResponse, health_handler};
pub use upload::{UploadResponse, upload_pdf_handler};
