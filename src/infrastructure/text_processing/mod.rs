mod extractor_factory;
mod pdf_extractor;
mod text_sanitizer;

pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use pdf_extractor::{PdfExtractor, collect_page_texts};
pub use text_sanitizer::{join_pages, sanitize_extracted_text};
