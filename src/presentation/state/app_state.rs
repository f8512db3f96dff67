use std::sync::Arc;

use crate::application::services::{ExtractionService, SummaryService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub summary_service: Arc<SummaryService>,
    pub settings: Arc<Settings>,
}
