//! Coupons SDK
//!
//! This crate provides the public API for the `coupons` module:
//! - `CouponsApi` trait for in-process consumers
//! - `Coupon`, `NewCoupon`, `Basket` and `MissingCoupon` models
//! - `CouponsError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use coupons_sdk::{Basket, CouponsApi};
//!
//! let basket = client.apply_discount(Basket::new("basket-1", 100), "SUMMER10").await?;
//! assert!(basket.application_successful);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CouponsApi;
pub use errors::CouponsError;
pub use models::{Basket, Coupon, MissingCoupon, NewCoupon};
