#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("migration failed: {0}")]
    MigrationFailed(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}
