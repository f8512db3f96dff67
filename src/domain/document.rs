use std::path::PathBuf;

use uuid::Uuid;

use super::storage_path::StoragePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A staged upload. Lives only for the request that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub storage_path: StoragePath,
    pub temporary_path: PathBuf,
    pub original_filename: String,
    pub size_bytes: u64,
}

impl UploadedDocument {
    pub fn new(
        id: DocumentId,
        storage_path: StoragePath,
        temporary_path: PathBuf,
        original_filename: String,
        size_bytes: u64,
    ) -> Self {
        Self {
            id,
            storage_path,
            temporary_path,
            original_filename,
            size_bytes,
        }
    }
}
