use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{
    EngineProbe, ExtractionError, RecognitionError, RecognitionProfile, TextExtractor,
    TextRecognizer,
};
use crate::domain::UploadedDocument;
use crate::infrastructure::text_processing::sanitize_extracted_text;

/// OCR strategy: probe the engine, then try each recognizer in order.
///
/// Recognizers never run concurrently. The next one is tried only when the previous
/// one failed with an error that [`RecognitionError::allows_fallback`].
pub struct OcrExtractor {
    probe: Arc<dyn EngineProbe>,
    recognizers: Vec<Arc<dyn TextRecognizer>>,
    profile: RecognitionProfile,
}

impl OcrExtractor {
    pub fn new(probe: Arc<dyn EngineProbe>, recognizers: Vec<Arc<dyn TextRecognizer>>) -> Self {
        Self {
            probe,
            recognizers,
            profile: RecognitionProfile::english(),
        }
    }

    pub fn profile(&self) -> &RecognitionProfile {
        &self.profile
    }
}

#[async_trait]
impl TextExtractor for OcrExtractor {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.original_filename,
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, ExtractionError> {
        let version = self.probe.check().await.map_err(|e| {
            ExtractionError::EngineUnavailable(format!(
                "Tesseract OCR is not properly installed or not in PATH ({e})"
            ))
        })?;
        tracing::debug!(version = %version, "OCR engine reachable");

        let mut last_failure: Option<(&'static str, RecognitionError)> = None;

        for recognizer in &self.recognizers {
            match recognizer
                .recognize(&document.temporary_path, &self.profile)
                .await
            {
                Ok(text) => {
                    tracing::info!(
                        recognizer = recognizer.name(),
                        chars = text.len(),
                        fallback = last_failure.is_some(),
                        "OCR recognition complete"
                    );
                    return Ok(sanitize_extracted_text(&text));
                }
                Err(e) if e.allows_fallback() => {
                    tracing::warn!(recognizer = recognizer.name(), error = %e, "Recognizer failed");
                    last_failure = Some((recognizer.name(), e));
                }
                Err(e) => {
                    tracing::error!(recognizer = recognizer.name(), error = %e, "Recognizer failed terminally");
                    return Err(ExtractionError::EngineFailed(format!(
                        "{}: {}",
                        recognizer.name(),
                        e
                    )));
                }
            }
        }

        match last_failure {
            Some((name, e)) => Err(ExtractionError::EngineFailed(format!("{name}: {e}"))),
            None => Err(ExtractionError::EngineUnavailable(
                "no text recognizer configured".to_string(),
            )),
        }
    }
}
