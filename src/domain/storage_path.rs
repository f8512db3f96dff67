use std::fmt;
use std::path::Path;

use super::document::DocumentId;

/// Store-relative name of a staged upload.
///
/// The name is derived from the document id, so two uploads never collide. The
/// original extension is kept (lowercased) because the OCR engine sniffs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(document_id: &DocumentId, original_filename: &str) -> Self {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) => Self(format!("{}.{}", document_id.as_uuid(), ext)),
            None => Self(document_id.as_uuid().to_string()),
        }
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
