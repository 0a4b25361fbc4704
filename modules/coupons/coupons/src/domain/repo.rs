//! Repository trait for coupon storage.

use async_trait::async_trait;
use coupons_sdk::Coupon;

use super::error::DomainError;

/// Storage operations used by the coupon service.
///
/// Implementations decide the backing mechanism; the service only ever sees
/// `Arc<dyn CouponRepository>`.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Retrieves the coupon stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no coupon has this code.
    async fn find_by_code(&self, code: &str) -> Result<Coupon, DomainError>;

    /// Stores a new coupon.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCode` if the code is taken, or `Uninitialized` if the
    /// storage has been closed.
    async fn insert(&self, coupon: Coupon) -> Result<(), DomainError>;
}
