use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

/// Short-lived home for uploads while one request extracts them.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError>;

    /// Deleting a path that no longer exists succeeds.
    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;

    /// Filesystem location of a staged object, for engines that only take paths.
    fn resolve(&self, path: &StoragePath) -> Result<PathBuf, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("failed to write staged upload: {0}")]
    UploadFailed(String),
    #[error("staged upload not found: {0}")]
    NotFound(String),
    #[error("failed to read staged upload: {0}")]
    DownloadFailed(String),
    #[error("failed to delete staged upload: {0}")]
    DeleteFailed(String),
    #[error("invalid staging name: {0}")]
    InvalidPath(String),
    #[error("upload stream error: {0}")]
    Io(#[from] io::Error),
}
