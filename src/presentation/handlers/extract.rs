use std::io;
use std::sync::OnceLock;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::domain::{ExtractionFailure, FailureReason};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

/// Multipart field carrying the document.
pub const DOCUMENT_FIELD: &str = "document";

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    pub details: String,
}

#[tracing::instrument(skip_all)]
pub async fn extract_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let upload = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break None,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return read_error_response(e.status(), e.body_text());
            }
        };

        if field.name() != Some(DOCUMENT_FIELD) {
            tracing::debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => break None,
        };

        tracing::debug!(
            filename = %filename,
            content_type = field.content_type().unwrap_or("application/octet-stream"),
            "Processing file upload"
        );

        // A body-limit or framing error surfaces mid-stream; keep its status.
        let rejected = OnceLock::new();
        let stream = field
            .map_err(|e| {
                let _ = rejected.set((e.status(), e.body_text()));
                io::Error::other(e)
            })
            .boxed();

        match state.extraction_service.stage(&filename, stream, None).await {
            Ok(upload) => break Some(upload),
            Err(failure) => {
                return match rejected.into_inner() {
                    Some((status, details)) => read_error_response(status, details),
                    None => failure_response(failure),
                };
            }
        }
    };

    match state.extraction_service.extract(upload).await {
        Ok(result) => {
            tracing::debug!(preview = %preview_text(&result.text), "Returning extracted text");
            (StatusCode::OK, Json(ExtractResponse { text: result.text })).into_response()
        }
        Err(failure) => failure_response(failure),
    }
}

pub fn status_for(reason: FailureReason) -> StatusCode {
    match reason {
        FailureReason::NoFileUploaded => StatusCode::BAD_REQUEST,
        FailureReason::UnsupportedFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        FailureReason::EmptyOutput => StatusCode::UNPROCESSABLE_ENTITY,
        FailureReason::EngineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        FailureReason::EngineFailed | FailureReason::StoreFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn read_error_response(status: StatusCode, details: String) -> Response {
    (
        status,
        Json(ExtractErrorResponse {
            error: "Failed to read upload".to_string(),
            reason: None,
            details,
        }),
    )
        .into_response()
}

fn failure_response(failure: ExtractionFailure) -> Response {
    let error = match failure.reason {
        FailureReason::NoFileUploaded => "No file uploaded",
        _ => "Failed to extract text",
    };

    (
        status_for(failure.reason),
        Json(ExtractErrorResponse {
            error: error.to_string(),
            reason: Some(failure.reason),
            details: failure.detail,
        }),
    )
        .into_response()
}
