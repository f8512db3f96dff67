mod extraction_service;
mod summary_service;
mod transient_upload;

pub use extraction_service::ExtractionService;
pub use summary_service::{SummaryError, SummaryService, parse_summary_response};
pub use transient_upload::TransientUpload;
