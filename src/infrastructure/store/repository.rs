//! In-memory store repository implementation

use async_trait::async_trait;

use crate::domain::store::{Store, StoreFilter, StoreId, StoreRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::memory::SharedMemory;

/// In-memory implementation of StoreRepository
#[derive(Debug, Clone)]
pub struct InMemoryStoreRepository {
    state: SharedMemory,
}

impl InMemoryStoreRepository {
    /// Create a repository over a shared dataset
    pub fn new(state: SharedMemory) -> Self {
        Self { state }
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn get(&self, id: &StoreId) -> Result<Option<Store>, DomainError> {
        let state = self.state.lock().await;
        Ok(state.stores.get(id.as_str()).cloned())
    }

    async fn create(&self, store: Store) -> Result<Store, DomainError> {
        let mut state = self.state.lock().await;
        let id = store.id().as_str().to_string();

        if state.stores.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Store with ID '{}' already exists",
                id
            )));
        }

        state.stores.insert(id, store.clone());
        Ok(store)
    }

    async fn update(&self, store: &Store) -> Result<Store, DomainError> {
        let mut state = self.state.lock().await;
        let id = store.id().as_str().to_string();

        if !state.stores.contains_key(&id) {
            return Err(DomainError::not_found(format!("Store '{}' not found", id)));
        }

        state.stores.insert(id, store.clone());
        Ok(store.clone())
    }

    async fn delete(&self, id: &StoreId) -> Result<bool, DomainError> {
        let mut state = self.state.lock().await;

        let removed = state.stores.remove(id.as_str()).is_some();

        if removed {
            // Ratings reference the store; they go with it, under the same lock
            state
                .ratings
                .retain(|(_, store_id), _| store_id != id.as_str());
        }

        Ok(removed)
    }

    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>, DomainError> {
        let state = self.state.lock().await;

        let mut stores: Vec<Store> = state
            .stores
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        stores.sort_by_key(|s| s.created_at());

        Ok(stores)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Store>, DomainError> {
        let state = self.state.lock().await;

        let mut stores: Vec<Store> = state
            .stores
            .values()
            .filter(|s| s.owner_id() == owner_id)
            .cloned()
            .collect();
        stores.sort_by_key(|s| s.created_at());

        Ok(stores)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let state = self.state.lock().await;
        Ok(state.stores.len() as u64)
    }
}
