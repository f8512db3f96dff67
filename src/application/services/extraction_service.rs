use std::collections::HashMap;
use std::io;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use bytes::Bytes;
use futures::FutureExt;
use futures::stream::BoxStream;

use crate::application::ports::{ExtractionError, StagingStore, TextExtractor};
use crate::domain::{
    DocumentFormat, DocumentId, ExtractionFailure, ExtractionResult, ExtractionStrategy,
    StoragePath, UploadedDocument,
};

use super::transient_upload::TransientUpload;

/// Drives one upload through classification, the matching strategy and cleanup.
pub struct ExtractionService {
    store: Arc<dyn StagingStore>,
    strategies: HashMap<ExtractionStrategy, Arc<dyn TextExtractor>>,
}

impl ExtractionService {
    pub fn new(
        store: Arc<dyn StagingStore>,
        strategies: Vec<(ExtractionStrategy, Arc<dyn TextExtractor>)>,
    ) -> Self {
        Self {
            store,
            strategies: strategies.into_iter().collect(),
        }
    }

    /// Persists an incoming upload under a fresh name.
    #[tracing::instrument(skip_all, fields(filename = %original_filename))]
    pub async fn stage(
        &self,
        original_filename: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<TransientUpload, ExtractionFailure> {
        let id = DocumentId::new();
        let storage_path = StoragePath::new(&id, original_filename);

        let temporary_path = self
            .store
            .resolve(&storage_path)
            .map_err(|e| ExtractionError::StoreFailure(e.to_string()))?;

        let size_bytes = match self.store.store(&storage_path, stream, content_length).await {
            Ok(size) => size,
            Err(e) => {
                tracing::error!(error = %e, path = %storage_path, "Failed to stage upload");
                if let Err(cleanup) = self.store.delete(&storage_path).await {
                    tracing::error!(error = %cleanup, path = %storage_path, "Failed to remove partial upload");
                }
                return Err(ExtractionError::StoreFailure(e.to_string()).into());
            }
        };

        tracing::debug!(
            document_id = %id.as_uuid(),
            path = %storage_path,
            size_bytes,
            "Upload staged"
        );

        let document = UploadedDocument::new(
            id,
            storage_path,
            temporary_path,
            original_filename.to_string(),
            size_bytes,
        );

        Ok(TransientUpload::new(document, Arc::clone(&self.store)))
    }

    /// Extracts text from a staged upload and always releases it.
    #[tracing::instrument(skip_all, fields(document_id, filename))]
    pub async fn extract(
        &self,
        upload: Option<TransientUpload>,
    ) -> Result<ExtractionResult, ExtractionFailure> {
        let Some(upload) = upload else {
            tracing::warn!("Extraction requested without a file");
            return Err(ExtractionError::NoFileUploaded.into());
        };

        let span = tracing::Span::current();
        span.record(
            "document_id",
            tracing::field::display(upload.document().id.as_uuid()),
        );
        span.record("filename", upload.document().original_filename.as_str());

        let outcome = self.run(upload.document()).await;
        upload.release().await;

        match outcome {
            Ok(result) => {
                tracing::info!(chars = result.text.len(), "Text extraction complete");
                Ok(result)
            }
            Err(e) => {
                let failure = ExtractionFailure::from(e);
                if failure.reason.is_configuration_problem() {
                    tracing::error!(reason = %failure.reason, detail = %failure.detail, "Text extraction failed");
                } else {
                    tracing::warn!(reason = %failure.reason, detail = %failure.detail, "Text extraction failed");
                }
                Err(failure)
            }
        }
    }

    async fn run(&self, document: &UploadedDocument) -> Result<ExtractionResult, ExtractionError> {
        let format = DocumentFormat::from_filename(&document.original_filename)?;
        let strategy = format.strategy();

        let extractor = self.strategies.get(&strategy).ok_or_else(|| {
            ExtractionError::EngineUnavailable(format!(
                "no {} extractor configured",
                strategy.as_str()
            ))
        })?;

        tracing::debug!(
            strategy = strategy.as_str(),
            mime = format.as_mime(),
            "Dispatching to extraction strategy"
        );

        let text = AssertUnwindSafe(extractor.extract_text(document))
            .catch_unwind()
            .await
            .map_err(|_| {
                ExtractionError::EngineFailed(format!("{} extractor panicked", strategy.as_str()))
            })??;

        ExtractionResult::from_text(&text)
            .ok_or_else(|| ExtractionError::EmptyOutput(document.original_filename.clone()))
    }
}
