use axum::Json;
use axum::response::IntoResponse;

pub async fn health() -> axum::response::Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}
