/*
 * Responsibility
 * - URL structure of the service: /, /public, /private
 * - Three static paths only; anything richer belongs in the proxy in front
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    health::health, private_info::private_info, public_info::public_info,
};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/public", get(public_info))
        .route("/private", get(private_info))
}
