//! Test helper utilities for webserver integration tests

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use planner::{CleaningPlanner, InMemoryJobStore, JobStore};
use serde_json::Value;
use tower::ServiceExt;
use webserver::WebServer;

/// Create a test socket address (never bound by these tests)
pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

/// Router over a fresh in-memory store
pub fn test_router() -> Router {
    router_with_store(InMemoryJobStore::new())
}

/// Router over any job store
pub fn router_with_store<S: JobStore + 'static>(store: S) -> Router {
    WebServer::new(create_test_address(), CleaningPlanner::new(store)).build_router()
}

/// Send a request through the router and decode the JSON body
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(router, method, uri, body.map(|b| b.to_string())).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send a request with a raw body and return the undecoded response body
pub async fn send_raw(router: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Submit a job and return its id
pub async fn create_job(router: &Router, body: Value) -> String {
    let (status, json) = send(router, "POST", "/jobs", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {json}");
    json["jobId"].as_str().expect("jobId in response").to_string()
}
