pub mod storage;

pub use storage::{build_storage, InMemoryCouponRepository, Storage};
