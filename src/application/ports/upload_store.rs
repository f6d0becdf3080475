use std::io;

use crate::domain::StoredFile;

#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Writes `data` under `filename`, or under the first free
    /// `{stem}_{n}.{ext}` variant when that name is taken.
    async fn save(&self, filename: &str, data: &[u8]) -> Result<StoredFile, UploadStoreError>;

    async fn delete(&self, file: &StoredFile) -> Result<(), UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
