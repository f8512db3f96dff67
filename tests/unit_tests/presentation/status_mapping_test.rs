use axum::http::StatusCode;

use docsum::domain::FailureReason;
use docsum::presentation::handlers::status_for;

#[test]
fn given_failure_reasons_when_mapping_then_returns_stable_statuses() {
    let cases = [
        (FailureReason::NoFileUploaded, StatusCode::BAD_REQUEST),
        (FailureReason::UnsupportedFormat, StatusCode::UNSUPPORTED_MEDIA_TYPE),
        (FailureReason::EmptyOutput, StatusCode::UNPROCESSABLE_ENTITY),
        (FailureReason::EngineUnavailable, StatusCode::SERVICE_UNAVAILABLE),
        (FailureReason::EngineFailed, StatusCode::INTERNAL_SERVER_ERROR),
        (FailureReason::StoreFailure, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (reason, expected) in cases {
        assert_eq!(status_for(reason), expected, "{reason}");
    }
}
