//! End-to-end scenarios through the full router.

mod notes;
mod tickets;
mod users;
mod validation;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use bugbase::server::{model::app::AppState, router::routes};
use bugbase_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

/// Sends a request through the router and returns the status with the JSON body, or
/// `Value::Null` for an empty body
async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
