mod document;
mod document_format;
mod extraction;
mod storage_path;
mod summary;

pub use document::{DocumentId, UploadedDocument};
pub use document_format::{DocumentFormat, ExtractionStrategy, UnsupportedFormat};
pub use extraction::{ExtractionFailure, ExtractionResult, FailureReason};
pub use storage_path::StoragePath;
pub use summary::{Summary, SummaryLength};
