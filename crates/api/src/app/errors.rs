use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::{Outcome, RepoError, RepoResult};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 400 echoing the structural defects of an inbound transfer object.
pub fn validation_error(errors: Vec<String>) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

/// Map a mutation result to the boundary response.
///
/// Business acceptance → 200 with the outcome envelope; business rejection →
/// 400 with the envelope; infrastructure failure → 400 with a `flag: false`
/// envelope carrying the sanitized message, preserving the write-path
/// contract of one response shape.
pub fn outcome_response(result: RepoResult<Outcome>) -> axum::response::Response {
    match result {
        Ok(outcome) if outcome.flag => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(outcome) => (StatusCode::BAD_REQUEST, Json(outcome)).into_response(),
        Err(RepoError::Store(message)) => {
            (StatusCode::BAD_REQUEST, Json(Outcome::rejected(message))).into_response()
        }
    }
}

/// Map a read-path infrastructure failure. The original fault was already
/// logged at the store; only the sanitized message goes out.
pub fn store_error(err: RepoError) -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        err.message(),
    )
}
