/*
 * Responsibility
 * - GET /public (informational, no auth check)
 */
use axum::{http::StatusCode, response::IntoResponse};

pub const PUBLIC_MESSAGE: &str = "hey this is publicly accessible and has no auth";

pub async fn public_info() -> impl IntoResponse {
    (StatusCode::OK, PUBLIC_MESSAGE)
}
