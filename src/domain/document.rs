use chrono::{DateTime, Utc};

use super::DocumentId;

/// Metadata and normalized text for one uploaded PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub page_count: u32,
    pub size_kb: f64,
    pub extracted_text: String,
    pub created_at: DateTime<Utc>,
}

/// A record before the store has assigned it an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub filename: String,
    pub original_filename: String,
    pub file_path: String,
    pub page_count: u32,
    pub size_kb: f64,
    pub extracted_text: String,
}

impl NewDocument {
    pub fn size_kb_from_bytes(byte_len: usize) -> f64 {
        byte_len as f64 / 1024.0
    }

    pub fn into_record(self, id: DocumentId, created_at: DateTime<Utc>) -> DocumentRecord {
        DocumentRecord {
            id,
            filename: self.filename,
            original_filename: self.original_filename,
            file_path: self.file_path,
            page_count: self.page_count,
            size_kb: self.size_kb,
            extracted_text: self.extracted_text,
            created_at,
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpdate {
    pub filename: Option<String>,
    pub original_filename: Option<String>,
    pub file_path: Option<String>,
    pub page_count: Option<u32>,
    pub size_kb: Option<f64>,
    pub extracted_text: Option<String>,
}

impl DocumentUpdate {
    pub fn is_empty(&self) -> bool {
        self.filename.is_none()
            && self.original_filename.is_none()
            && self.file_path.is_none()
            && self.page_count.is_none()
            && self.size_kb.is_none()
            && self.extracted_text.is_none()
    }

    /// Merges the set fields into `record`. Returns whether anything changed.
    pub fn apply_to(&self, record: &mut DocumentRecord) -> bool {
        let mut modified = false;

        if let Some(filename) = &self.filename {
            modified |= record.filename != *filename;
            record.filename = filename.clone();
        }
        if let Some(original_filename) = &self.original_filename {
            modified |= record.original_filename != *original_filename;
            record.original_filename = original_filename.clone();
        }
        if let Some(file_path) = &self.file_path {
            modified |= record.file_path != *file_path;
            record.file_path = file_path.clone();
        }
        if let Some(page_count) = self.page_count {
            modified |= record.page_count != page_count;
            record.page_count = page_count;
        }
        if let Some(size_kb) = self.size_kb {
            modified |= record.size_kb != size_kb;
            record.size_kb = size_kb;
        }
        if let Some(extracted_text) = &self.extracted_text {
            modified |= record.extracted_text != *extracted_text;
            record.extracted_text = extracted_text.clone();
        }

        modified
    }
}
