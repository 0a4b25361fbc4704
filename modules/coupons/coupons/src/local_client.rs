use async_trait::async_trait;
use coupons_sdk::{Basket, Coupon, CouponsApi, CouponsError, NewCoupon};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::service::CouponService;

/// In-process `CouponsApi` backed directly by the domain service.
pub struct LocalClient {
    service: Arc<CouponService>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<CouponService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CouponsApi for LocalClient {
    async fn apply_discount(&self, basket: Basket, code: &str) -> Result<Basket, CouponsError> {
        self.service
            .apply_discount(basket, code)
            .await
            .map_err(Into::into)
    }

    async fn create_coupon(&self, new_coupon: NewCoupon) -> Result<Uuid, CouponsError> {
        self.service
            .create_coupon(new_coupon)
            .await
            .map_err(Into::into)
    }

    async fn get_coupons_by_codes(&self, codes: &[String]) -> Result<Vec<Coupon>, CouponsError> {
        self.service
            .get_coupons_by_codes(codes)
            .await
            .into_result()
            .map_err(Into::into)
    }
}
