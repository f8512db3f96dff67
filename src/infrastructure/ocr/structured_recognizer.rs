use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use rusty_tesseract::{Args, Image, TessError};

use crate::application::ports::{RecognitionError, RecognitionProfile, TextRecognizer};

/// Primary recognizer: the typed `rusty-tesseract` binding.
pub struct StructuredTesseractRecognizer {
    timeout: Duration,
}

impl StructuredTesseractRecognizer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl TextRecognizer for StructuredTesseractRecognizer {
    fn name(&self) -> &'static str {
        "rusty-tesseract"
    }

    async fn recognize(
        &self,
        image: &Path,
        profile: &RecognitionProfile,
    ) -> Result<String, RecognitionError> {
        if !tokio::fs::try_exists(image).await.unwrap_or(false) {
            return Err(RecognitionError::InvalidInput(image.display().to_string()));
        }

        let image = image.to_path_buf();
        let args = Args {
            lang: profile.language.clone(),
            oem: Some(i32::from(profile.engine_mode)),
            psm: Some(i32::from(profile.page_segmentation_mode)),
            dpi: None,
            config_variables: HashMap::new(),
        };

        let task = tokio::task::spawn_blocking(move || {
            let image = Image::from_path(image)
                .map_err(|e| RecognitionError::Failed(format!("image rejected: {e}")))?;
            rusty_tesseract::image_to_string(&image, &args).map_err(map_tess_error)
        });

        tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| RecognitionError::Timeout(self.timeout))?
            .map_err(|e| RecognitionError::Failed(format!("task join error: {e}")))?
    }
}

fn map_tess_error(error: TessError) -> RecognitionError {
    match error {
        TessError::TesseractNotFoundError => RecognitionError::EngineNotFound(error.to_string()),
        TessError::CommandExitStatusError(status, stderr) => {
            RecognitionError::Failed(format!("tesseract {status}: {}", stderr.trim()))
        }
        other => RecognitionError::Failed(other.to_string()),
    }
}
