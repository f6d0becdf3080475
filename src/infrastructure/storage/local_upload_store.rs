use std::io;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::StoredFile;

const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Writes uploads into a single directory on the local filesystem.
pub struct LocalUploadStore {
    base_path: PathBuf,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        tracing::info!(path = %base_path.display(), "Upload directory ready");
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Name tried on the given attempt: the original first, then `{stem}_{n}{ext}`.
pub fn candidate_filename(filename: &str, attempt: u32) -> String {
    if attempt == 0 {
        return filename.to_string();
    }

    match filename.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{}{}", &filename[..dot], attempt, &filename[dot..]),
        _ => format!("{filename}_{attempt}"),
    }
}

fn bare_filename(filename: &str) -> Result<&str, UploadStoreError> {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| UploadStoreError::InvalidFilename(filename.to_string()))
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, filename: &str, data: &[u8]) -> Result<StoredFile, UploadStoreError> {
        let filename = bare_filename(filename)?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = candidate_filename(filename, attempt);
            let path = self.base_path.join(&candidate);

            let mut file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(UploadStoreError::Io(e)),
            };

            tracing::debug!(path = %path.display(), "Writing PDF to file path");

            let written = async {
                file.write_all(data).await?;
                file.flush().await
            }
            .await;

            if let Err(e) = written {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::error!(
                        error = %remove_err,
                        path = %path.display(),
                        "Failed to remove partially written upload"
                    );
                }
                return Err(UploadStoreError::WriteFailed(e.to_string()));
            }

            return Ok(StoredFile::new(candidate, path));
        }

        Err(UploadStoreError::WriteFailed(format!(
            "no free filename for {filename} after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }

    async fn delete(&self, file: &StoredFile) -> Result<(), UploadStoreError> {
        tokio::fs::remove_file(file.path())
            .await
            .map_err(|e| UploadStoreError::DeleteFailed(format!("{}: {e}", file)))
    }
}
