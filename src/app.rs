/*
 * Responsibility
 * - Config load → Router assembly → axum::serve()
 * - Tracing / panic-hook initialization
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex: RUST_LOG=info,jwt_demo_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr is
        // hidden by the process launcher.
        tracing::error!(?info, "panic");

        // In development, fail fast. In production keep the default behavior
        // and let the server keep running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    let app = build_router();

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("listening on {} in {:?} mode", config.addr, config.app_env);
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router() -> Router {
    middleware::http::apply(api::routes())
}

#[cfg(test)]
mod tests {
    use super::build_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = build_router().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn get_with_auth(uri: &str, auth: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, auth)
            .body(Body::empty())
            .unwrap()
    }

    fn token_for(payload: &[u8]) -> String {
        format!("header.{}", URL_SAFE_NO_PAD.encode(payload))
    }

    #[tokio::test]
    async fn root_returns_ok() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn root_ignores_auth_headers() {
        let (status, body) = send(get_with_auth("/", "Bearer garbage")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn public_needs_no_auth() {
        let (status, body) = send(get("/public")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"hey this is publicly accessible and has no auth");
    }

    #[tokio::test]
    async fn public_ignores_auth_headers() {
        let (status, body) = send(get_with_auth("/public", "Bearer not-a-jwt")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"hey this is publicly accessible and has no auth");
    }

    #[tokio::test]
    async fn private_without_auth_is_unauthorized() {
        let (status, body) = send(get("/private")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn private_treats_empty_bearer_token_as_missing() {
        let (status, body) = send(get_with_auth("/private", "Bearer ")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn private_rejects_non_bearer_scheme() {
        let (status, _) = send(get_with_auth("/private", "Basic dXNlcjpwYXNz")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn private_rejects_token_without_dot() {
        let (status, body) = send(get_with_auth("/private", "Bearer not-a-jwt")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["message"], "invalid JWT format");
    }

    #[tokio::test]
    async fn private_rejects_undecodable_payload() {
        let (status, _) = send(get_with_auth("/private", "Bearer header.!!!!")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn private_returns_decoded_payload() {
        let auth = format!("Bearer {}", token_for(br#"{"sub":"abc"}"#));
        let (status, body) = send(get_with_auth("/private", &auth)).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "hey, this is private and needed auth, here is your JWT info",
                "jwt": {"sub": "abc"},
            })
        );
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let resp = build_router().oneshot(get("/")).await.unwrap();
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
