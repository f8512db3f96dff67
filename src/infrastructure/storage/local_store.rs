use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, WriteMultipart};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

const MAX_INFLIGHT_PARTS: usize = 4;

/// Upload directory on local disk. Objects are flat files named by [`StoragePath`],
/// so [`StagingStore::resolve`] can hand engines a real filesystem path.
pub struct LocalStagingStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalStagingStore {
    pub fn new(base_path: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let base_path = base_path.canonicalize()?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(path = %base_path.display(), "Upload directory ready");

        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn object_path(path: &StoragePath) -> ObjectPath {
        ObjectPath::from(path.as_str())
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let upload = self
            .inner
            .put_multipart(&Self::object_path(path))
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        let mut writer = WriteMultipart::new(upload);
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    let _ = writer.abort().await;
                    return Err(StagingStoreError::Io(e));
                }
            };
            if let Err(e) = writer.wait_for_capacity(MAX_INFLIGHT_PARTS).await {
                let _ = writer.abort().await;
                return Err(StagingStoreError::UploadFailed(e.to_string()));
            }
            writer.write(&chunk);
            written += chunk.len() as u64;
        }

        writer
            .finish()
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        if let Some(expected) = content_length.filter(|expected| *expected != written) {
            tracing::warn!(expected, written, "Upload length differs from declared length");
        }

        Ok(written)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        let object = match self.inner.get(&Self::object_path(path)).await {
            Ok(object) => object,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(StagingStoreError::NotFound(path.to_string()));
            }
            Err(e) => return Err(StagingStoreError::DownloadFailed(e.to_string())),
        };

        let bytes = object
            .bytes()
            .await
            .map_err(|e| StagingStoreError::DownloadFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        match self.inner.delete(&Self::object_path(path)).await {
            Ok(()) => Ok(()),
            Err(object_store::Error::NotFound { .. }) => {
                tracing::debug!(path = %path, "Upload already gone");
                Ok(())
            }
            Err(e) => Err(StagingStoreError::DeleteFailed(e.to_string())),
        }
    }

    fn resolve(&self, path: &StoragePath) -> Result<PathBuf, StagingStoreError> {
        let name = path.as_str();
        if name.is_empty() || name.contains(&['/', '\\'][..]) || name.starts_with('.') {
            return Err(StagingStoreError::InvalidPath(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }
}
