//! Public models for the coupons module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the coupons module and its consumers. Wire formats live in the
//! REST layer of the implementation crate.

use uuid::Uuid;

/// A discount offer identified by a unique, case-sensitive code.
///
/// Coupons are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    /// Percentage to grant. Not range-checked.
    pub discount: i64,
    /// Not enforced when a coupon is applied.
    pub min_basket_value: i64,
}

/// Data required to create a coupon. The identifier is generated on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub discount: i64,
    pub code: String,
    pub min_basket_value: i64,
}

/// A shopping basket and its discount-application state.
///
/// `applied_discount` and `application_successful` are only ever set together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Basket {
    pub id: String,
    pub value: i64,
    pub applied_discount: i64,
    pub application_successful: bool,
}

impl Basket {
    /// Creates a basket with no discount applied.
    #[must_use]
    pub fn new(id: impl Into<String>, value: i64) -> Self {
        Self {
            id: id.into(),
            value,
            applied_discount: 0,
            application_successful: false,
        }
    }
}

/// A code from a batch lookup that did not resolve to a coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCoupon {
    pub code: String,
    /// Zero-based position of the code in the requested batch.
    pub index: usize,
}

impl std::fmt::Display for MissingCoupon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code: {}, index: {}", self.code, self.index)
    }
}
