mod ocr_extractor;
mod structured_recognizer;
mod tesseract_cli_recognizer;
mod tesseract_probe;

pub use ocr_extractor::OcrExtractor;
pub use structured_recognizer::StructuredTesseractRecognizer;
pub use tesseract_cli_recognizer::TesseractCliRecognizer;
pub use tesseract_probe::TesseractProbe;
