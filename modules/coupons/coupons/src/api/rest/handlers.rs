use std::sync::Arc;

use axum::extract::{Extension, FromRequest};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    ApplyCouponRequest, BasketDto, CouponDto, CreateCouponRequest, LookupCouponsRequest,
};
use super::error::{ApiError, ApiResult};
use crate::domain::service::CouponService;

/// JSON body extractor whose rejection renders as an `{"error": ...}` 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonPayload<T>(pub T);

/// POST /api/apply
pub async fn apply_coupon(
    Extension(svc): Extension<Arc<CouponService>>,
    JsonPayload(req): JsonPayload<ApplyCouponRequest>,
) -> ApiResult<Json<BasketDto>> {
    let basket = svc.apply_discount(req.basket.into(), &req.code).await?;
    Ok(Json(basket.into()))
}

/// POST /api/create
pub async fn create_coupon(
    Extension(svc): Extension<Arc<CouponService>>,
    JsonPayload(req): JsonPayload<CreateCouponRequest>,
) -> ApiResult<StatusCode> {
    svc.create_coupon(req.into()).await?;
    Ok(StatusCode::OK)
}

/// GET /api/coupons
pub async fn get_coupons_by_codes(
    Extension(svc): Extension<Arc<CouponService>>,
    JsonPayload(req): JsonPayload<LookupCouponsRequest>,
) -> ApiResult<Json<Vec<CouponDto>>> {
    let coupons = svc.get_coupons_by_codes(&req.codes).await.into_result()?;
    Ok(Json(coupons.into_iter().map(Into::into).collect()))
}
