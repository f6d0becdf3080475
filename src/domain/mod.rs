mod document;
mod document_id;
mod stored_file;

pub use document::{DocumentRecord, DocumentUpdate, NewDocument};
pub use document_id::DocumentId;
pub use stored_file::StoredFile;
