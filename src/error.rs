/*
 * Responsibility
 * - App-wide AppError definition
 * - IntoResponse impl (HTTP status / JSON error body)
 * - Convert token decode errors into the unified response shape
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::jwt::JwtDecodeError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No usable `Authorization: Bearer <JWT>` header on a private route.
    #[error("missing bearer token")]
    MissingAuth,
    /// A token was presented but its payload did not decode as base64url JSON.
    #[error("invalid JWT format")]
    MalformedToken,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingAuth => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "hey, this is private and needed auth (send Authorization: Bearer <JWT>)",
            ),
            AppError::MalformedToken => {
                (StatusCode::BAD_REQUEST, "INVALID_JWT", "invalid JWT format")
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JwtDecodeError> for AppError {
    fn from(_: JwtDecodeError) -> Self {
        // Every decode failure looks the same to the client.
        AppError::MalformedToken
    }
}
