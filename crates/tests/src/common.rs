use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::AppConfig;
use tower::ServiceExt;

/// Build a test router from the default configuration.
pub fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

/// Build a test router from a caller-supplied configuration.
pub fn test_app_with(config: AppConfig) -> Router {
    server::openapi::api_router(&config)
}

/// POST a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route, returning raw bytes + status + headers (for downloads).
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send_raw(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _headers, body_bytes) = send_raw(app, req).await;

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// Send a request and return raw bytes + status + headers.
pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, headers, body_bytes.to_vec())
}
