use std::sync::Arc;

use crate::application::ports::StagingStore;
use crate::domain::UploadedDocument;

/// Scoped ownership of a staged upload.
///
/// [`TransientUpload::release`] deletes the backing object. If the guard is dropped
/// without being released (the request future was cancelled or unwound), deletion is
/// scheduled on the runtime instead. Either way the store sees one delete.
pub struct TransientUpload {
    document: UploadedDocument,
    store: Arc<dyn StagingStore>,
    released: bool,
}

impl TransientUpload {
    pub fn new(document: UploadedDocument, store: Arc<dyn StagingStore>) -> Self {
        Self {
            document,
            store,
            released: false,
        }
    }

    pub fn document(&self) -> &UploadedDocument {
        &self.document
    }

    /// Deletes the staged object. Failures are logged, never returned.
    pub async fn release(mut self) {
        self.released = true;
        let path = &self.document.storage_path;

        match self.store.delete(path).await {
            Ok(()) => tracing::debug!(path = %path, "Transient upload deleted"),
            Err(e) => tracing::error!(path = %path, error = %e, "Failed to delete transient upload"),
        }
    }
}

impl Drop for TransientUpload {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let store = Arc::clone(&self.store);
        let path = self.document.storage_path.clone();
        tracing::warn!(path = %path, "Transient upload dropped before release, scheduling cleanup");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = store.delete(&path).await {
                        tracing::error!(path = %path, error = %e, "Deferred cleanup failed");
                    }
                });
            }
            Err(_) => {
                if let Err(e) = std::fs::remove_file(&self.document.temporary_path)
                    && e.kind() != std::io::ErrorKind::NotFound
                {
                    tracing::error!(path = %path, error = %e, "Deferred cleanup failed");
                }
            }
        }
    }
}
