//! Domain error types for the coupons module.

use coupons_sdk::{CouponsError, MissingCoupon};
use thiserror::Error;

/// Domain-level errors for the coupons module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("coupon not found")]
    NotFound { code: String },

    #[error("coupon with code '{code}' already exists")]
    DuplicateCode { code: String },

    /// The storage table has been discarded.
    #[error("entries map is not initialized")]
    Uninitialized,

    #[error("tried to apply discount to negative value")]
    NegativeBasketValue { value: i64 },

    /// Aggregated failures of a batch lookup, in request order.
    #[error("errors occurred while fetching coupons: {}", join_missing(.missing))]
    LookupFailed { missing: Vec<MissingCoupon> },
}

fn join_missing(missing: &[MissingCoupon]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode { code: code.into() }
    }

    #[must_use]
    pub fn negative_basket_value(value: i64) -> Self {
        Self::NegativeBasketValue { value }
    }

    #[must_use]
    pub fn lookup_failed(missing: Vec<MissingCoupon>) -> Self {
        Self::LookupFailed { missing }
    }
}

impl From<DomainError> for CouponsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { code } => Self::not_found(code),
            DomainError::DuplicateCode { code } => Self::duplicate_code(code),
            DomainError::Uninitialized => Self::unavailable(),
            e @ DomainError::NegativeBasketValue { .. } => Self::invalid_basket(e.to_string()),
            DomainError::LookupFailed { missing } => Self::lookup_failed(missing),
        }
    }
}
