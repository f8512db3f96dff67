use std::time::Duration;

use docsum::application::ports::{RecognitionError, RecognitionProfile, TextRecognizer};
use docsum::infrastructure::ocr::TesseractCliRecognizer;

use crate::common::fake_tesseract;

#[tokio::test]
async fn given_working_binary_when_recognizing_then_passes_fixed_arguments() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), r#"echo "$@""#);
    let image = dir.path().join("scan.png");
    let recognizer = TesseractCliRecognizer::new(binary, Duration::from_secs(10));

    let text = recognizer
        .recognize(&image, &RecognitionProfile::english())
        .await
        .unwrap();

    assert_eq!(
        text.trim(),
        format!("{} stdout -l eng --oem 1 --psm 3", image.display())
    );
}

#[tokio::test]
async fn given_binary_printing_text_when_recognizing_then_returns_stdout() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "printf 'INVOICE #123\\n\\f'");
    let recognizer = TesseractCliRecognizer::new(binary, Duration::from_secs(10));

    let text = recognizer
        .recognize(&dir.path().join("scan.png"), &RecognitionProfile::english())
        .await
        .unwrap();

    assert!(text.starts_with("INVOICE #123"));
}

#[tokio::test]
async fn given_failing_binary_when_recognizing_then_returns_failed_with_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(
        dir.path(),
        "echo 'Error opening data file eng.traineddata' >&2\nexit 1",
    );
    let recognizer = TesseractCliRecognizer::new(binary, Duration::from_secs(10));

    let result = recognizer
        .recognize(&dir.path().join("scan.png"), &RecognitionProfile::english())
        .await;

    match result {
        Err(RecognitionError::Failed(msg)) => {
            assert!(msg.contains("Direct Tesseract execution failed"));
            assert!(msg.contains("eng.traineddata"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_binary_when_recognizing_then_returns_engine_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let recognizer =
        TesseractCliRecognizer::new(dir.path().join("no-such-tesseract"), Duration::from_secs(10));

    let result = recognizer
        .recognize(&dir.path().join("scan.png"), &RecognitionProfile::english())
        .await;

    assert!(matches!(result, Err(RecognitionError::EngineNotFound(_))));
}

#[tokio::test]
async fn given_hanging_binary_when_recognizing_then_times_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let binary = fake_tesseract(dir.path(), "sleep 5");
    let recognizer = TesseractCliRecognizer::new(binary, Duration::from_millis(200));

    let result = recognizer
        .recognize(&dir.path().join("scan.png"), &RecognitionProfile::english())
        .await;

    assert!(matches!(result, Err(RecognitionError::Timeout(_))));
}
