#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fieldgate_api::config::ServerConfig;
use fieldgate_api::router::build_app_router;
use fieldgate_api::state::AppState;
use fieldgate_core::validation::default_rule_set;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with the production middleware stack
/// and the default rule set.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), default_rule_set());
    build_app_router(state, &config)
}

/// Send a request with a raw body and optional `Content-Type`.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(body.into()).unwrap())
        .await
        .unwrap()
}

/// POST a JSON value as `application/json`.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        body.to_string(),
        Some("application/json"),
    )
    .await
}

/// POST a raw string body as `application/json`.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        body.to_string(),
        Some("application/json"),
    )
    .await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
