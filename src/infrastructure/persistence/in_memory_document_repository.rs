use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{DocumentId, DocumentRecord, DocumentUpdate, NewDocument};

/// Process-local document store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, DocumentRecord>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, document: &NewDocument) -> Result<DocumentId, RepositoryError> {
        let id = DocumentId::new();
        let record = document.clone().into_record(id, Utc::now());
        self.documents.write().await.insert(id, record);
        Ok(id)
    }

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: DocumentId,
        update: &DocumentUpdate,
    ) -> Result<bool, RepositoryError> {
        let mut documents = self.documents.write().await;
        Ok(documents
            .get_mut(&id)
            .map(|record| update.apply_to(record))
            .unwrap_or(false))
    }
}
