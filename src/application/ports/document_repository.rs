use async_trait::async_trait;

use crate::domain::{DocumentId, DocumentRecord, DocumentUpdate, NewDocument};

use super::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persists a new record and returns the identifier the store assigned.
    async fn create(&self, document: &NewDocument) -> Result<DocumentId, RepositoryError>;

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError>;

    /// Merges the set fields of `update` into the stored record.
    /// Returns `false` when no record was modified.
    async fn update(
        &self,
        id: DocumentId,
        update: &DocumentUpdate,
    ) -> Result<bool, RepositoryError>;
}
