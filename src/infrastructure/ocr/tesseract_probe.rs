use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{EngineProbe, RecognitionError};

/// Checks the engine by running `tesseract --version`.
pub struct TesseractProbe {
    binary: PathBuf,
    timeout: Duration,
}

impl TesseractProbe {
    pub fn new(binary: PathBuf, timeout: Duration) -> Self {
        Self { binary, timeout }
    }
}

#[async_trait]
impl EngineProbe for TesseractProbe {
    async fn check(&self) -> Result<String, RecognitionError> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(&self.binary)
                .arg("--version")
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| RecognitionError::Timeout(self.timeout))?
        .map_err(|e| {
            RecognitionError::EngineNotFound(format!("{}: {}", self.binary.display(), e))
        })?;

        if !output.status.success() {
            return Err(RecognitionError::EngineNotFound(format!(
                "{} --version exited with {}: {}",
                self.binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // Older releases print the banner on stderr.
        let banner = if output.stdout.is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        let version = String::from_utf8_lossy(&banner)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(version)
    }
}
