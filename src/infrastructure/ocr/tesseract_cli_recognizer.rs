use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{RecognitionError, RecognitionProfile, TextRecognizer};

/// Fallback recognizer: `tesseract <image> stdout -l .. --oem .. --psm ..`.
///
/// The child is killed if the timeout fires.
pub struct TesseractCliRecognizer {
    binary: PathBuf,
    timeout: Duration,
}

impl TesseractCliRecognizer {
    pub fn new(binary: PathBuf, timeout: Duration) -> Self {
        Self { binary, timeout }
    }
}

#[async_trait]
impl TextRecognizer for TesseractCliRecognizer {
    fn name(&self) -> &'static str {
        "tesseract-cli"
    }

    async fn recognize(
        &self,
        image: &Path,
        profile: &RecognitionProfile,
    ) -> Result<String, RecognitionError> {
        let mut command = Command::new(&self.binary);
        command
            .arg(image)
            .arg("stdout")
            .args(profile.to_cli_args())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::debug!(
            binary = %self.binary.display(),
            image = %image.display(),
            "Running tesseract directly"
        );

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| RecognitionError::Timeout(self.timeout))?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RecognitionError::EngineNotFound(format!(
                    "{}: {}",
                    self.binary.display(),
                    e
                )),
                _ => RecognitionError::Failed(format!("Direct Tesseract execution failed: {e}")),
            })?;

        if !output.status.success() {
            return Err(RecognitionError::Failed(format!(
                "Direct Tesseract execution failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
