/*
 * Responsibility
 * - GET /private: header extraction → payload decode → JSON response
 * - Decode only. The token is trusted as-is; verification already happened
 *   in the infrastructure in front of this service.
 */
use axum::{
    Json,
    http::{HeaderMap, header},
};

use crate::{api::dto::PrivateResponse, error::AppError, services::jwt};

pub const PRIVATE_MESSAGE: &str = "hey, this is private and needed auth, here is your JWT info";

pub async fn private_info(headers: HeaderMap) -> Result<Json<PrivateResponse>, AppError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::MissingAuth)?;

    // An empty token is treated the same as no token at all.
    let token = auth
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingAuth)?;

    let payload = match jwt::decode_payload(token) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = ?err, "bearer token payload did not decode");
            return Err(err.into());
        }
    };

    Ok(Json(PrivateResponse {
        message: PRIVATE_MESSAGE,
        jwt: payload,
    }))
}
