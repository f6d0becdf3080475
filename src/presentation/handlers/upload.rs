use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use crate::presentation::state::AppState;

use super::error::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub pdf_id: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_pdf_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart body");
            ApiError::new(e.status(), format!("Failed to read multipart: {}", e.body_text()))
        })?;

        let Some(field) = field else {
            tracing::warn!("Upload request with no file");
            return Err(ApiError::new(StatusCode::BAD_REQUEST, "No file uploaded"));
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::warn!(filename = %filename, error = %e, "Failed to read uploaded file");
            ApiError::new(e.status(), format!("Failed to read file: {}", e.body_text()))
        })?;

        tracing::debug!(filename = %filename, size = data.len(), "Processing PDF upload");

        let id = state.ingestion_service.ingest(&filename, &data).await?;

        return Ok(Json(UploadResponse {
            pdf_id: id.to_string(),
        }));
    }
}
