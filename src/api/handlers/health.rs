/*
 * Responsibility
 * - GET / (liveness probe)
 * - No inputs consulted, no side effects
 */
use axum::{http::StatusCode, response::IntoResponse};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
