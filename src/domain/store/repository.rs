//! Store repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Store, StoreId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Filter for store listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    /// Case-insensitive substring over name and address
    pub search: Option<String>,
}

impl StoreFilter {
    pub fn matches(&self, store: &Store) -> bool {
        match &self.search {
            Some(search) => {
                let needle = search.to_lowercase();
                store.name().to_lowercase().contains(&needle)
                    || store.address().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// Repository trait for store storage
#[async_trait]
pub trait StoreRepository: Send + Sync + Debug {
    /// Get a store by its ID
    async fn get(&self, id: &StoreId) -> Result<Option<Store>, DomainError>;

    /// Create a new store
    async fn create(&self, store: Store) -> Result<Store, DomainError>;

    /// Update an existing store's profile fields
    async fn update(&self, store: &Store) -> Result<Store, DomainError>;

    /// Delete a store; its ratings go with it
    async fn delete(&self, id: &StoreId) -> Result<bool, DomainError>;

    /// List stores matching the filter, ordered by creation time
    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>, DomainError>;

    /// List stores belonging to one owner, ordered by creation time
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Store>, DomainError>;

    /// Count all stores
    async fn count(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock store repository for testing
    #[derive(Debug, Default)]
    pub struct MockStoreRepository {
        stores: Arc<RwLock<HashMap<String, Store>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockStoreRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl StoreRepository for MockStoreRepository {
        async fn get(&self, id: &StoreId) -> Result<Option<Store>, DomainError> {
            self.check_should_fail().await?;
            let stores = self.stores.read().await;
            Ok(stores.get(id.as_str()).cloned())
        }

        async fn create(&self, store: Store) -> Result<Store, DomainError> {
            self.check_should_fail().await?;
            let mut stores = self.stores.write().await;
            let id = store.id().as_str().to_string();

            if stores.contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "Store with ID '{}' already exists",
                    id
                )));
            }

            stores.insert(id, store.clone());
            Ok(store)
        }

        async fn update(&self, store: &Store) -> Result<Store, DomainError> {
            self.check_should_fail().await?;
            let mut stores = self.stores.write().await;
            let id = store.id().as_str().to_string();

            if !stores.contains_key(&id) {
                return Err(DomainError::not_found(format!("Store '{}' not found", id)));
            }

            stores.insert(id, store.clone());
            Ok(store.clone())
        }

        async fn delete(&self, id: &StoreId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut stores = self.stores.write().await;
            Ok(stores.remove(id.as_str()).is_some())
        }

        async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>, DomainError> {
            self.check_should_fail().await?;
            let stores = self.stores.read().await;

            let mut result: Vec<Store> = stores
                .values()
                .filter(|s| filter.matches(s))
                .cloned()
                .collect();
            result.sort_by_key(|s| s.created_at());

            Ok(result)
        }

        async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Store>, DomainError> {
            self.check_should_fail().await?;
            let stores = self.stores.read().await;

            let mut result: Vec<Store> = stores
                .values()
                .filter(|s| s.owner_id() == owner_id)
                .cloned()
                .collect();
            result.sort_by_key(|s| s.created_at());

            Ok(result)
        }

        async fn count(&self) -> Result<u64, DomainError> {
            self.check_should_fail().await?;
            let stores = self.stores.read().await;
            Ok(stores.len() as u64)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_store(name: &str, owner_id: &UserId) -> Store {
            Store::new(StoreId::generate(), name, "1 Main St", owner_id.clone()).unwrap()
        }

        #[tokio::test]
        async fn test_create_get_update_delete() {
            let repo = MockStoreRepository::new();
            let owner = UserId::generate();
            let mut store = create_test_store("Corner Bakery", &owner);

            repo.create(store.clone()).await.unwrap();
            assert!(repo.get(store.id()).await.unwrap().is_some());

            store.set_name("Corner Cafe").unwrap();
            repo.update(&store).await.unwrap();
            assert_eq!(
                repo.get(store.id()).await.unwrap().unwrap().name(),
                "Corner Cafe"
            );

            assert!(repo.delete(store.id()).await.unwrap());
            assert!(repo.get(store.id()).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_update_missing_store() {
            let repo = MockStoreRepository::new();
            let store = create_test_store("Corner Bakery", &UserId::generate());

            let result = repo.update(&store).await;
            assert!(matches!(result, Err(DomainError::NotFound { .. })));
        }

        #[tokio::test]
        async fn test_list_with_search() {
            let repo = MockStoreRepository::new();
            let owner = UserId::generate();

            repo.create(create_test_store("Corner Bakery", &owner))
                .await
                .unwrap();
            repo.create(create_test_store("Hardware Depot", &owner))
                .await
                .unwrap();

            let all = repo.list(&StoreFilter::default()).await.unwrap();
            assert_eq!(all.len(), 2);

            let bakeries = repo
                .list(&StoreFilter {
                    search: Some("bakery".to_string()),
                })
                .await
                .unwrap();
            assert_eq!(bakeries.len(), 1);
            assert_eq!(bakeries[0].name(), "Corner Bakery");
        }

        #[tokio::test]
        async fn test_list_by_owner() {
            let repo = MockStoreRepository::new();
            let owner_a = UserId::generate();
            let owner_b = UserId::generate();

            repo.create(create_test_store("A One", &owner_a)).await.unwrap();
            repo.create(create_test_store("A Two", &owner_a)).await.unwrap();
            repo.create(create_test_store("B One", &owner_b)).await.unwrap();

            let owned = repo.list_by_owner(&owner_a).await.unwrap();
            assert_eq!(owned.len(), 2);
            assert!(owned.iter().all(|s| s.owner_id() == &owner_a));
        }
    }
}
