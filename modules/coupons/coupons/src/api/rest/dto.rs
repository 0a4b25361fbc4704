use coupons_sdk::{Basket, Coupon, NewCoupon};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Missing fields bind as zero values; only wrong types are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketDto {
    pub id: String,
    pub value: i64,
    pub applied_discount: i64,
    pub application_successful: bool,
}

impl From<BasketDto> for Basket {
    fn from(dto: BasketDto) -> Self {
        Self {
            id: dto.id,
            value: dto.value,
            applied_discount: dto.applied_discount,
            application_successful: dto.application_successful,
        }
    }
}

impl From<Basket> for BasketDto {
    fn from(basket: Basket) -> Self {
        Self {
            id: basket.id,
            value: basket.value,
            applied_discount: basket.applied_discount,
            application_successful: basket.application_successful,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: Uuid,
    pub code: String,
    pub discount: i64,
    pub min_basket_value: i64,
}

impl From<Coupon> for CouponDto {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id,
            code: coupon.code,
            discount: coupon.discount,
            min_basket_value: coupon.min_basket_value,
        }
    }
}

/// Body of `POST /api/apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyCouponRequest {
    pub code: String,
    pub basket: BasketDto,
}

/// Body of `POST /api/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCouponRequest {
    pub discount: i64,
    pub code: String,
    pub min_basket_value: i64,
}

impl From<CreateCouponRequest> for NewCoupon {
    fn from(req: CreateCouponRequest) -> Self {
        Self {
            discount: req.discount,
            code: req.code,
            min_basket_value: req.min_basket_value,
        }
    }
}

/// Body of `GET /api/coupons`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupCouponsRequest {
    pub codes: Vec<String>,
}

/// Error body shared by every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
