use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{SummaryError, SummaryService};
use crate::domain::{Summary, SummaryLength};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub text: Option<String>,
    pub length: Option<String>,
}

#[derive(Serialize)]
pub struct SummaryErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(flatten)]
    pub fallback: Option<Summary>,
}

#[tracing::instrument(skip_all)]
pub async fn generate_summary_handler(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Response {
    if let Some(text) = request.text.as_deref() {
        tracing::debug!(preview = %preview_text(text), "Summary requested");
    }

    let length = SummaryLength::parse(request.length.as_deref());

    match state
        .summary_service
        .summarize(request.text.as_deref(), length)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e @ (SummaryError::NoText | SummaryError::TooShort)) => {
            tracing::warn!(error = %e, "Rejected summary request");
            (
                StatusCode::BAD_REQUEST,
                Json(SummaryErrorResponse {
                    error: e.to_string(),
                    details: None,
                    fallback: None,
                }),
            )
                .into_response()
        }
        Err(e @ SummaryError::Completion(_)) => {
            tracing::error!(error = %e, "Summary generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SummaryErrorResponse {
                    error: "Failed to generate summary".to_string(),
                    details: Some(e.to_string()),
                    fallback: Some(SummaryService::unavailable()),
                }),
            )
                .into_response()
        }
    }
}
