//! Coupons Module Implementation
//!
//! The public API is defined in `coupons-sdk` and re-exported here.

pub use coupons_sdk::{Basket, Coupon, CouponsApi, CouponsError, MissingCoupon, NewCoupon};

pub mod local_client;
pub use local_client::LocalClient;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
