//! `CouponsApi` trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CouponsError;
use crate::models::{Basket, Coupon, NewCoupon};

/// Public API trait for the `coupons` module.
///
/// Consumers hold it as `Arc<dyn CouponsApi>`:
/// ```ignore
/// let id = client.create_coupon(new_coupon).await?;
/// let coupons = client.get_coupons_by_codes(&["SUMMER10".to_owned()]).await?;
/// ```
#[async_trait]
pub trait CouponsApi: Send + Sync {
    /// Apply the coupon identified by `code` to `basket`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no coupon exists for `code`
    /// * `InvalidBasket` - the basket value is negative
    async fn apply_discount(&self, basket: Basket, code: &str) -> Result<Basket, CouponsError>;

    /// Store a new coupon and return its generated identifier.
    ///
    /// # Errors
    ///
    /// * `DuplicateCode` - a coupon with the same code exists
    /// * `Unavailable` - storage has been closed
    async fn create_coupon(&self, new_coupon: NewCoupon) -> Result<Uuid, CouponsError>;

    /// Fetch coupons for every code, in request order.
    ///
    /// # Errors
    ///
    /// * `LookupFailed` - at least one code did not resolve; lists every failure
    async fn get_coupons_by_codes(&self, codes: &[String]) -> Result<Vec<Coupon>, CouponsError>;
}
