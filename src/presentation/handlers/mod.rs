mod extract;
mod health;
mod summary;

pub use extract::{
    DOCUMENT_FIELD, ExtractErrorResponse, ExtractResponse, extract_text_handler, status_for,
};
pub use health::health_handler;
pub use summary::{SummaryErrorResponse, SummaryRequest, generate_summary_handler};
