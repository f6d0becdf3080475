use std::fmt;
use std::path::{Path, PathBuf};

/// A raw upload written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    filename: String,
    path: PathBuf,
}

impl StoredFile {
    pub fn new(filename: impl Into<String>, path: PathBuf) -> Self {
        Self {
            filename: filename.into(),
            path,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl fmt::Display for StoredFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
