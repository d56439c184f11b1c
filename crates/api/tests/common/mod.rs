#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_api::config::{AppEnv, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Admin token configured by [`test_config`].
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Host header sent with every helper request; pagination links use it.
pub const TEST_HOST: &str = "testserver";

/// Build a test `ServerConfig` with safe defaults: no notifications, a
/// known admin token and links derived from the `Host` header.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        app_env: AppEnv::Development,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_base_url: None,
        telegram: None,
        admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState::new(pool, config))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", TEST_HOST)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, json, None).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let req = request(Method::POST, uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// Send a JSON request authenticated with [`TEST_ADMIN_TOKEN`].
pub async fn admin_json(
    app: Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send_json(app, method, uri, json, Some(TEST_ADMIN_TOKEN)).await
}

/// Send a bodiless GET authenticated with [`TEST_ADMIN_TOKEN`].
pub async fn admin_get(app: Router, uri: &str) -> Response<Body> {
    let req = request(Method::GET, uri)
        .header("authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = request(method, uri).header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(json.to_string())).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
