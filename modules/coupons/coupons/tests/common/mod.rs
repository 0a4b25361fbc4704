#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for coupons integration tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use coupons::api::rest::register_routes;
use coupons::domain::service::CouponService;
use coupons::infra::InMemoryCouponRepository;
use serde_json::Value;
use tower::ServiceExt as _;

pub fn create_service() -> (Arc<InMemoryCouponRepository>, Arc<CouponService>) {
    let repo = Arc::new(InMemoryCouponRepository::new());
    let service = Arc::new(CouponService::new(repo.clone()));
    (repo, service)
}

pub fn create_router(service: Arc<CouponService>) -> Router {
    register_routes(Router::new(), service)
}

/// Sends a JSON request and returns the status and parsed body (`Null` when empty).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (axum::http::StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
