use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::CouponService;

pub const APPLY_PATH: &str = "/api/apply";
pub const CREATE_PATH: &str = "/api/create";
pub const COUPONS_PATH: &str = "/api/coupons";

#[must_use]
pub fn register_routes(router: Router, service: Arc<CouponService>) -> Router {
    tracing::debug!(
        apply = APPLY_PATH,
        create = CREATE_PATH,
        coupons = COUPONS_PATH,
        "Registering coupon routes"
    );

    router
        .route(APPLY_PATH, post(handlers::apply_coupon))
        .route(CREATE_PATH, post(handlers::create_coupon))
        .route(COUPONS_PATH, get(handlers::get_coupons_by_codes))
        .layer(Extension(service))
}
