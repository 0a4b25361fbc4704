//! Domain service for the coupons module.

use std::sync::Arc;

use coupons_sdk::{Basket, Coupon, MissingCoupon, NewCoupon};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::error::DomainError;
use super::repo::CouponRepository;

/// Outcome of a batch lookup.
///
/// Found coupons are kept even when some codes fail, so callers can use the
/// partial result alongside the aggregated error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponLookup {
    pub coupons: Vec<Coupon>,
    pub missing: Vec<MissingCoupon>,
}

impl CouponLookup {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Returns the aggregated failure, if any code did not resolve.
    #[must_use]
    pub fn error(&self) -> Option<DomainError> {
        if self.is_complete() {
            None
        } else {
            Some(DomainError::lookup_failed(self.missing.clone()))
        }
    }

    /// Converts into the found coupons, or the aggregated failure.
    ///
    /// # Errors
    ///
    /// Returns `LookupFailed` listing every missing code and its index.
    pub fn into_result(self) -> Result<Vec<Coupon>, DomainError> {
        if self.missing.is_empty() {
            Ok(self.coupons)
        } else {
            Err(DomainError::lookup_failed(self.missing))
        }
    }
}

/// Coordinates basket discounts and coupon creation against the repository.
#[derive(Clone)]
pub struct CouponService {
    repo: Arc<dyn CouponRepository>,
}

impl CouponService {
    #[must_use]
    pub fn new(repo: Arc<dyn CouponRepository>) -> Self {
        Self { repo }
    }

    /// Applies the coupon stored under `code` to `basket`.
    ///
    /// A positive basket receives the coupon's discount. A zero-value basket
    /// is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown code and `NegativeBasketValue` when
    /// the basket value is below zero.
    #[instrument(skip(self, basket), fields(basket_id = %basket.id, value = basket.value))]
    pub async fn apply_discount(
        &self,
        mut basket: Basket,
        code: &str,
    ) -> Result<Basket, DomainError> {
        let coupon = self.repo.find_by_code(code).await?;

        match basket.value {
            v if v > 0 => {
                basket.applied_discount = coupon.discount;
                basket.application_successful = true;
                debug!(discount = coupon.discount, "Discount applied");
            }
            v if v < 0 => return Err(DomainError::negative_basket_value(v)),
            _ => debug!("Zero-value basket, no discount applied"),
        }

        Ok(basket)
    }

    /// Creates a coupon with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Propagates `DuplicateCode` and `Uninitialized` from the repository.
    #[instrument(skip(self, new_coupon), fields(code = %new_coupon.code))]
    pub async fn create_coupon(&self, new_coupon: NewCoupon) -> Result<Uuid, DomainError> {
        let coupon = Coupon {
            id: Uuid::new_v4(),
            code: new_coupon.code,
            discount: new_coupon.discount,
            min_basket_value: new_coupon.min_basket_value,
        };
        let id = coupon.id;

        self.repo.insert(coupon).await?;

        info!(coupon_id = %id, "Coupon created");
        Ok(id)
    }

    /// Looks up every code in order, collecting hits and misses.
    #[instrument(skip(self, codes), fields(count = codes.len()))]
    pub async fn get_coupons_by_codes(&self, codes: &[String]) -> CouponLookup {
        let mut lookup = CouponLookup::default();

        for (index, code) in codes.iter().enumerate() {
            match self.repo.find_by_code(code).await {
                Ok(coupon) => lookup.coupons.push(coupon),
                Err(e) => {
                    debug!(code = %code, index, error = %e, "Coupon lookup failed");
                    lookup.missing.push(MissingCoupon {
                        code: code.clone(),
                        index,
                    });
                }
            }
        }

        if !lookup.is_complete() {
            warn!(
                found = lookup.coupons.len(),
                missing = lookup.missing.len(),
                "Batch lookup incomplete"
            );
        }

        lookup
    }
}
