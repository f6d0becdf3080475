use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{DocumentId, DocumentRecord, DocumentUpdate, NewDocument};

pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    filename: String,
    original_filename: String,
    file_path: String,
    page_count: i32,
    size_kb: f64,
    extracted_text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for DocumentRecord {
    type Error = RepositoryError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let page_count = u32::try_from(row.page_count).map_err(|_| {
            RepositoryError::CorruptRecord(format!(
                "document {} has page_count {}",
                row.id, row.page_count
            ))
        })?;

        Ok(DocumentRecord {
            id: DocumentId::from_uuid(row.id),
            filename: row.filename,
            original_filename: row.original_filename,
            file_path: row.file_path,
            page_count,
            size_kb: row.size_kb,
            extracted_text: row.extracted_text,
            created_at: row.created_at,
        })
    }
}

fn page_count_column(page_count: u32) -> Result<i32, RepositoryError> {
    i32::try_from(page_count)
        .map_err(|_| RepositoryError::QueryFailed(format!("page_count {page_count} out of range")))
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self, document), fields(filename = %document.filename))]
    async fn create(&self, document: &NewDocument) -> Result<DocumentId, RepositoryError> {
        let id = DocumentId::new();
        let page_count = page_count_column(document.page_count)?;

        sqlx::query(
            r#"
            INSERT INTO documents
                (id, filename, original_filename, file_path, page_count, size_kb, extracted_text)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&document.filename)
        .bind(&document.original_filename)
        .bind(&document.file_path)
        .bind(page_count)
        .bind(document.size_kb)
        .bind(&document.extracted_text)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        tracing::info!(document_id = %id, "Saved document record");
        Ok(id)
    }

    #[instrument(skip(self), fields(document_id = %id))]
    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, filename, original_filename, file_path, page_count, size_kb,
                   extracted_text, created_at
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(DocumentRecord::try_from).transpose()
    }

    #[instrument(skip(self, update), fields(document_id = %id))]
    async fn update(
        &self,
        id: DocumentId,
        update: &DocumentUpdate,
    ) -> Result<bool, RepositoryError> {
        if update.is_empty() {
            return Ok(false);
        }

        let page_count = update.page_count.map(page_count_column).transpose()?;

        let result = sqlx::query(
            r#"
            UPDATE documents
            SET filename = COALESCE($2, filename),
                original_filename = COALESCE($3, original_filename),
                file_path = COALESCE($4, file_path),
                page_count = COALESCE($5, page_count),
                size_kb = COALESCE($6, size_kb),
                extracted_text = COALESCE($7, extracted_text),
                updated_at = now()
            WHERE id = $1
              AND (filename, original_filename, file_path, page_count, size_kb, extracted_text)
                  IS DISTINCT FROM
                  (COALESCE($2, filename), COALESCE($3, original_filename),
                   COALESCE($4, file_path), COALESCE($5, page_count),
                   COALESCE($6, size_kb), COALESCE($7, extracted_text))
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.filename.as_deref())
        .bind(update.original_filename.as_deref())
        .bind(update.file_path.as_deref())
        .bind(page_count)
        .bind(update.size_kb)
        .bind(update.extracted_text.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
