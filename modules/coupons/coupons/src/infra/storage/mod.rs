pub mod in_memory_repo;

use std::sync::Arc;

pub use in_memory_repo::InMemoryCouponRepository;

use crate::config::{CouponsConfig, StorageBackend};
use crate::domain::repo::CouponRepository;

/// A constructed storage backend.
///
/// The concrete handle is kept next to the trait object so the host can run
/// backend-specific lifecycle steps (such as closing the table on shutdown).
#[derive(Clone)]
pub enum Storage {
    InMemory(Arc<InMemoryCouponRepository>),
}

impl Storage {
    #[must_use]
    pub fn repository(&self) -> Arc<dyn CouponRepository> {
        match self {
            Self::InMemory(repo) => {
                let repo: Arc<dyn CouponRepository> = repo.clone();
                repo
            }
        }
    }

    /// Releases the backing store.
    pub fn close(&self) {
        match self {
            Self::InMemory(repo) => repo.close(),
        }
    }
}

/// Builds the storage backend selected in configuration.
#[must_use]
pub fn build_storage(config: &CouponsConfig) -> Storage {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory coupon storage");
            Storage::InMemory(Arc::new(InMemoryCouponRepository::new()))
        }
    }
}
