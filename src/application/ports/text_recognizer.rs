use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

/// Fixed Tesseract settings: English, LSTM engine, automatic page segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionProfile {
    pub language: String,
    pub engine_mode: u8,
    pub page_segmentation_mode: u8,
}

impl RecognitionProfile {
    pub fn english() -> Self {
        Self {
            language: "eng".to_string(),
            engine_mode: 1,
            page_segmentation_mode: 3,
        }
    }

    pub fn to_cli_args(&self) -> Vec<String> {
        vec![
            "-l".to_string(),
            self.language.clone(),
            "--oem".to_string(),
            self.engine_mode.to_string(),
            "--psm".to_string(),
            self.page_segmentation_mode.to_string(),
        ]
    }
}

impl Default for RecognitionProfile {
    fn default() -> Self {
        Self::english()
    }
}

#[async_trait]
pub trait TextRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn recognize(
        &self,
        image: &Path,
        profile: &RecognitionProfile,
    ) -> Result<String, RecognitionError>;
}

/// Answers whether the OCR engine can be reached at all.
#[async_trait]
pub trait EngineProbe: Send + Sync {
    async fn check(&self) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("engine not reachable: {0}")]
    EngineNotFound(String),
    #[error("{0}")]
    Failed(String),
    #[error("cannot read input image: {0}")]
    InvalidInput(String),
    #[error("recognition timed out after {0:?}")]
    Timeout(Duration),
}

impl RecognitionError {
    /// Whether the next recognizer in the chain should be tried.
    ///
    /// Input problems would fail identically on every path, and a timed-out
    /// recognizer may still hold the engine.
    pub fn allows_fallback(&self) -> bool {
        matches!(self, Self::EngineNotFound(_) | Self::Failed(_))
    }
}
