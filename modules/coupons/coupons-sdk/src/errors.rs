//! Public error types for the `coupons` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

use crate::models::MissingCoupon;

/// Errors that can be returned by the `CouponsApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouponsError {
    /// No coupon exists for the given code.
    #[error("coupon not found: {code}")]
    NotFound { code: String },

    /// A coupon with the same code is already stored.
    #[error("coupon with code '{code}' already exists")]
    DuplicateCode { code: String },

    /// The basket cannot receive a discount.
    #[error("invalid basket: {message}")]
    InvalidBasket { message: String },

    /// One or more codes of a batch lookup did not resolve.
    #[error("errors occurred while fetching coupons: {}", join_missing(.missing))]
    LookupFailed { missing: Vec<MissingCoupon> },

    /// Coupon storage is not available.
    #[error("coupon storage is not initialized")]
    Unavailable,
}

fn join_missing(missing: &[MissingCoupon]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CouponsError {
    /// Create a `NotFound` error.
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Create a `DuplicateCode` error.
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode { code: code.into() }
    }

    /// Create an `InvalidBasket` error.
    pub fn invalid_basket(message: impl Into<String>) -> Self {
        Self::InvalidBasket {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn lookup_failed(missing: Vec<MissingCoupon>) -> Self {
        Self::LookupFailed { missing }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self::Unavailable
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
