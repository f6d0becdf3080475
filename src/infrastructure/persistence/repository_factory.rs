use std::sync::Arc;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::presentation::config::{DatabaseSettings, DocumentStoreProvider};

use super::in_memory_document_repository::InMemoryDocumentRepository;
use super::pg_document_repository::PgDocumentRepository;
use super::pg_pool::{create_pool, run_migrations};

pub struct DocumentRepositoryFactory;

impl DocumentRepositoryFactory {
    pub async fn create(
        settings: &DatabaseSettings,
    ) -> Result<Arc<dyn DocumentRepository>, RepositoryError> {
        match settings.provider {
            DocumentStoreProvider::Postgres => {
                let url = settings.url.as_deref().ok_or_else(|| {
                    RepositoryError::ConnectionFailed("database.url required".into())
                })?;
                let pool = create_pool(url, settings.max_connections).await?;
                run_migrations(&pool).await?;
                Ok(Arc::new(PgDocumentRepository::new(pool)))
            }
            DocumentStoreProvider::Memory => {
                tracing::warn!("Using in-memory document store; records are not persisted");
                Ok(Arc::new(InMemoryDocumentRepository::new()))
            }
        }
    }
}
