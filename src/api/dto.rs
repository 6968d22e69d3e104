use serde::Serialize;
use serde_json::Value;

/// Success body for GET /private: a fixed message plus the decoded,
/// unverified token payload.
#[derive(Debug, Serialize)]
pub struct PrivateResponse {
    pub message: &'static str,
    pub jwt: Value,
}
