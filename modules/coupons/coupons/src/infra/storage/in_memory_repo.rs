//! In-memory coupon repository.

use std::collections::HashMap;

use async_trait::async_trait;
use coupons_sdk::Coupon;
use parking_lot::RwLock;

use crate::domain::error::DomainError;
use crate::domain::repo::CouponRepository;

/// Coupons keyed by code, held for the lifetime of the process.
///
/// The table is `None` once [`close`](Self::close) has run.
pub struct InMemoryCouponRepository {
    entries: RwLock<Option<HashMap<String, Coupon>>>,
}

impl InMemoryCouponRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Some(HashMap::new())),
        }
    }

    /// Discards every stored coupon. Later inserts fail with `Uninitialized`.
    pub fn close(&self) {
        if let Some(entries) = self.entries.write().take() {
            tracing::debug!(count = entries.len(), "Coupon table discarded");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().as_ref().map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCouponRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn find_by_code(&self, code: &str) -> Result<Coupon, DomainError> {
        self.entries
            .read()
            .as_ref()
            .and_then(|entries| entries.get(code))
            .cloned()
            .ok_or_else(|| DomainError::not_found(code))
    }

    async fn insert(&self, coupon: Coupon) -> Result<(), DomainError> {
        let mut guard = self.entries.write();
        let entries = guard.as_mut().ok_or(DomainError::Uninitialized)?;

        if entries.contains_key(&coupon.code) {
            return Err(DomainError::duplicate_code(coupon.code));
        }

        entries.insert(coupon.code.clone(), coupon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_coupon(code: &str) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            code: code.to_owned(),
            discount: 10,
            min_basket_value: 50,
        }
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repo = InMemoryCouponRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_find_by_code_returns_inserted_coupon() {
        let repo = InMemoryCouponRepository::new();
        let coupon = test_coupon("TESTCODE");

        repo.insert(coupon.clone()).await.unwrap();
        let found = repo.find_by_code("TESTCODE").await.unwrap();

        assert_eq!(found, coupon);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_code_missing() {
        let repo = InMemoryCouponRepository::new();

        let result = repo.find_by_code("NOPE").await;

        assert_eq!(result.unwrap_err(), DomainError::not_found("NOPE"));
    }

    #[tokio::test]
    async fn test_codes_are_case_sensitive() {
        let repo = InMemoryCouponRepository::new();
        repo.insert(test_coupon("Summer")).await.unwrap();

        assert!(repo.find_by_code("summer").await.is_err());
        assert!(repo.insert(test_coupon("SUMMER")).await.is_ok());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_keeps_first() {
        let repo = InMemoryCouponRepository::new();
        let first = test_coupon("TESTCODE");
        let mut second = test_coupon("TESTCODE");
        second.discount = 90;

        repo.insert(first.clone()).await.unwrap();
        let result = repo.insert(second).await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::duplicate_code("TESTCODE")
        );
        assert_eq!(repo.find_by_code("TESTCODE").await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_closed_repository() {
        let repo = InMemoryCouponRepository::new();
        repo.insert(test_coupon("TESTCODE")).await.unwrap();

        repo.close();

        assert!(repo.is_empty());
        assert_eq!(
            repo.insert(test_coupon("OTHER")).await.unwrap_err(),
            DomainError::Uninitialized
        );
        assert!(matches!(
            repo.find_by_code("TESTCODE").await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
