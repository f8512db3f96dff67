use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TextExtractor, TextRecognizer};
use crate::domain::ExtractionStrategy;
use crate::infrastructure::ocr::{
    OcrExtractor, StructuredTesseractRecognizer, TesseractCliRecognizer, TesseractProbe,
};
use crate::presentation::config::ExtractionSettings;

use super::pdf_extractor::PdfExtractor;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("tesseract_path must not be empty")]
    MissingTesseractPath,
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds the PDF strategy and the OCR strategy with its recognizer chain:
    /// the structured engine binding first, the raw `tesseract` process second.
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Vec<(ExtractionStrategy, Arc<dyn TextExtractor>)>, ExtractorFactoryError> {
        let pdf_timeout = non_zero(settings.pdf.timeout_secs, "extraction.pdf.timeout_secs")?;
        let ocr_timeout = non_zero(settings.ocr.timeout_secs, "extraction.ocr.timeout_secs")?;
        let probe_timeout = non_zero(
            settings.ocr.probe_timeout_secs,
            "extraction.ocr.probe_timeout_secs",
        )?;

        if settings.ocr.tesseract_path.trim().is_empty() {
            return Err(ExtractorFactoryError::MissingTesseractPath);
        }
        let binary = PathBuf::from(settings.ocr.tesseract_path.trim());

        tracing::info!(
            tesseract = %binary.display(),
            ocr_timeout_secs = ocr_timeout.as_secs(),
            pdf_timeout_secs = pdf_timeout.as_secs(),
            "Configuring extraction strategies"
        );

        let recognizers: Vec<Arc<dyn TextRecognizer>> = vec![
            Arc::new(StructuredTesseractRecognizer::new(ocr_timeout)),
            Arc::new(TesseractCliRecognizer::new(binary.clone(), ocr_timeout)),
        ];
        let probe = Arc::new(TesseractProbe::new(binary, probe_timeout));

        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfExtractor::with_timeout(pdf_timeout));
        let ocr: Arc<dyn TextExtractor> = Arc::new(OcrExtractor::new(probe, recognizers));

        Ok(vec![
            (ExtractionStrategy::Pdf, pdf),
            (ExtractionStrategy::Ocr, ocr),
        ])
    }
}

fn non_zero(secs: u64, name: &'static str) -> Result<Duration, ExtractorFactoryError> {
    if secs == 0 {
        return Err(ExtractorFactoryError::ZeroTimeout(name));
    }
    Ok(Duration::from_secs(secs))
}
