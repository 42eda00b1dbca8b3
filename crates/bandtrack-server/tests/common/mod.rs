// Shared test utilities for integration tests
#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use bandtrack_server::{AppState, Config};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const DEMO_USER_ID: u64 = 1;
pub const ADMIN_ID: u64 = 999;

/// App state preloaded with the demo data.
pub fn test_app_state() -> Arc<AppState> {
    Arc::new(AppState::from_config(&Config::default()))
}

/// App state with nothing in the store.
pub fn empty_app_state() -> Arc<AppState> {
    let config = Config {
        seed_demo: false,
        ..Config::default()
    };
    Arc::new(AppState::from_config(&config))
}

pub fn test_app(state: Arc<AppState>) -> Router {
    bandtrack_server::router(state)
}

/// Send a request and decode the JSON response (`Value::Null` for non-JSON).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}
