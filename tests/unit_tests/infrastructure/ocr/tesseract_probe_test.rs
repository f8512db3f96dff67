use std::time::Duration;

use docsum::application::ports::{EngineProbe, RecognitionError};
use docsum::infrastructure::ocr::TesseractProbe;

use crate::common::fake_tesseract;

#[tokio::test]
async fn given_installed_engine_when_probing_then_returns_first_banner_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "echo 'tesseract 5.3.0'\necho ' leptonica-1.82.0'");
    let probe = TesseractProbe::new(binary, Duration::from_secs(5));

    let version = probe.check().await.unwrap();

    assert_eq!(version, "tesseract 5.3.0");
}

#[tokio::test]
async fn given_banner_on_stderr_when_probing_then_reads_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "echo 'tesseract 3.05.02' >&2");
    let probe = TesseractProbe::new(binary, Duration::from_secs(5));

    let version = probe.check().await.unwrap();

    assert_eq!(version, "tesseract 3.05.02");
}

#[tokio::test]
async fn given_failing_version_query_when_probing_then_returns_engine_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "exit 127");
    let probe = TesseractProbe::new(binary, Duration::from_secs(5));

    let result = probe.check().await;

    assert!(matches!(result, Err(RecognitionError::EngineNotFound(_))));
}

#[tokio::test]
async fn given_missing_binary_when_probing_then_returns_engine_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let probe = TesseractProbe::new(dir.path().join("absent"), Duration::from_secs(5));

    let result = probe.check().await;

    assert!(matches!(result, Err(RecognitionError::EngineNotFound(_))));
}

#[tokio::test]
async fn given_hanging_version_query_when_probing_then_times_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "sleep 5");
    let probe = TesseractProbe::new(binary, Duration::from_millis(200));

    let result = probe.check().await;

    assert!(matches!(result, Err(RecognitionError::Timeout(_))));
}
