/*
 * Responsibility
 * - Decode-only JWT payload extraction (no verification)
 * - Signature/expiry/issuer checks happen upstream (e.g. an Istio sidecar);
 *   this service must not duplicate them.
 */
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwtDecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the payload (second dot-separated segment) of a JWT as
/// base64url-encoded JSON, without verifying anything about the token.
pub fn decode_payload(token: &str) -> Result<Value, JwtDecodeError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or(JwtDecodeError::MissingPayload)?;

    // JWT segments are unpadded base64url; tolerate padded input as well as
    // segments already in the standard alphabet (translation leaves `+` and
    // `/` intact, so both alphabets decode).
    let normalized = payload
        .trim_end_matches('=')
        .replace('-', "+")
        .replace('_', "/");
    let bytes = STANDARD_NO_PAD.decode(normalized)?;
    let text = String::from_utf8(bytes)?;

    Ok(serde_json::from_str(&text)?)
}
