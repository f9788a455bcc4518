/*
 * Responsibility
 * - GET /health (liveness)
 * - registered as a public route: the access gate passes it through
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
