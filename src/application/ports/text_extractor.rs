use async_trait::async_trait;

use crate::domain::{ExtractionFailure, FailureReason, UnsupportedFormat, UploadedDocument};

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No file uploaded")]
    NoFileUploaded,
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("extraction failed: {0}")]
    EngineFailed(String),
    #[error("no text could be extracted from {0}")]
    EmptyOutput(String),
    #[error("could not stage upload: {0}")]
    StoreFailure(String),
}

impl ExtractionError {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::NoFileUploaded => FailureReason::NoFileUploaded,
            Self::UnsupportedFormat(_) => FailureReason::UnsupportedFormat,
            Self::EngineUnavailable(_) => FailureReason::EngineUnavailable,
            Self::EngineFailed(_) => FailureReason::EngineFailed,
            Self::EmptyOutput(_) => FailureReason::EmptyOutput,
            Self::StoreFailure(_) => FailureReason::StoreFailure,
        }
    }
}

impl From<UnsupportedFormat> for ExtractionError {
    fn from(err: UnsupportedFormat) -> Self {
        Self::UnsupportedFormat(err.0)
    }
}

impl From<ExtractionError> for ExtractionFailure {
    fn from(err: ExtractionError) -> Self {
        ExtractionFailure::new(err.reason(), err.to_string())
    }
}
