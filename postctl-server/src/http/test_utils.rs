//! Router helpers shared by the route tests

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::server::{build_router, ServerConfig};
use crate::db::SessionFactory;

/// Router over a fresh in-memory database.
pub(crate) async fn test_app() -> Router {
    let sessions = SessionFactory::in_memory()
        .await
        .expect("in-memory factory");
    build_router(sessions, &ServerConfig::default())
}

/// Send a body-less request; an empty response body comes back as `Value::Null`.
pub(crate) async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}
