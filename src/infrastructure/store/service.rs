//! Store management service

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::auth::{authorize, Action, Actor, OwnedResource};
use crate::domain::rating::{Rating, RatingRepository, RatingValue};
use crate::domain::store::{Store, StoreFilter, StoreId, StoreRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Request for creating a store
#[derive(Debug, Clone)]
pub struct CreateStoreRequest {
    pub name: String,
    pub address: String,
}

/// Request for updating a store's profile fields
#[derive(Debug, Clone, Default)]
pub struct UpdateStoreRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// A store as one viewer sees it, with the viewer's own rating attached
#[derive(Debug, Clone)]
pub struct StoreView {
    pub store: Store,
    pub my_rating: Option<RatingValue>,
}

/// A store together with its rating rows, for the owner dashboard
#[derive(Debug, Clone)]
pub struct StoreWithRatings {
    pub store: Store,
    pub ratings: Vec<Rating>,
}

/// Store management service.
///
/// Writes are gated by the access policy; ownership checks load the store
/// first so the policy can compare owner against actor. Reads are public.
#[derive(Debug)]
pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
    ratings: Arc<dyn RatingRepository>,
}

impl StoreService {
    /// Create a new store service
    pub fn new(stores: Arc<dyn StoreRepository>, ratings: Arc<dyn RatingRepository>) -> Self {
        Self { stores, ratings }
    }

    /// Create a store owned by `actor`
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateStoreRequest,
    ) -> Result<Store, DomainError> {
        authorize(actor, Action::CreateStore, None)?;

        let store = Store::new(
            StoreId::generate(),
            request.name,
            request.address,
            actor.id.clone(),
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        let store = self.stores.create(store).await?;

        tracing::debug!(
            store_id = store.id().as_str(),
            owner_id = actor.id.as_str(),
            "Store created"
        );

        Ok(store)
    }

    /// Update a store's profile fields
    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        request: UpdateStoreRequest,
    ) -> Result<Store, DomainError> {
        let store_id = StoreId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut store = self
            .stores
            .get(&store_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Store '{}' not found", id)))?;

        authorize(
            actor,
            Action::EditStore,
            Some(&OwnedResource::new(store.owner_id().clone())),
        )?;

        if let Some(name) = request.name {
            store
                .set_name(name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(address) = request.address {
            store
                .set_address(address)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        self.stores.update(&store).await
    }

    /// Delete a store; its ratings go with it
    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), DomainError> {
        let store_id = StoreId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let store = self
            .stores
            .get(&store_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Store '{}' not found", id)))?;

        authorize(
            actor,
            Action::DeleteStore,
            Some(&OwnedResource::new(store.owner_id().clone())),
        )?;

        if !self.stores.delete(&store_id).await? {
            return Err(DomainError::not_found(format!("Store '{}' not found", id)));
        }

        tracing::debug!(store_id = id, "Store deleted");

        Ok(())
    }

    /// Get a store, attaching the viewer's own rating when one is supplied
    pub async fn get(&self, id: &str, viewer: Option<&UserId>) -> Result<StoreView, DomainError> {
        let store_id = StoreId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let store = self
            .stores
            .get(&store_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Store '{}' not found", id)))?;

        let my_rating = match viewer {
            Some(user_id) => self
                .ratings
                .get(user_id, &store_id)
                .await?
                .map(|r| r.value()),
            None => None,
        };

        Ok(StoreView { store, my_rating })
    }

    /// List stores, attaching the viewer's own ratings when one is supplied
    pub async fn list(
        &self,
        filter: &StoreFilter,
        viewer: Option<&UserId>,
    ) -> Result<Vec<StoreView>, DomainError> {
        let stores = self.stores.list(filter).await?;

        let own_ratings: HashMap<String, RatingValue> = match viewer {
            Some(user_id) => self
                .ratings
                .list_by_user(user_id)
                .await?
                .into_iter()
                .map(|r| (r.store_id().as_str().to_string(), r.value()))
                .collect(),
            None => HashMap::new(),
        };

        Ok(stores
            .into_iter()
            .map(|store| {
                let my_rating = own_ratings.get(store.id().as_str()).copied();
                StoreView { store, my_rating }
            })
            .collect())
    }

    /// The actor's stores with their rating rows. Data scoping by owner, not
    /// a policy action: non-owners simply own nothing.
    pub async fn list_owned(&self, actor: &Actor) -> Result<Vec<StoreWithRatings>, DomainError> {
        let stores = self.stores.list_by_owner(&actor.id).await?;
        let mut result = Vec::with_capacity(stores.len());

        for store in stores {
            let ratings = self.ratings.list_for_store(store.id()).await?;
            result.push(StoreWithRatings { store, ratings });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::Role;
    use crate::domain::rating::RatingId;
    use crate::infrastructure::memory::{MemoryState, SharedMemory};
    use crate::infrastructure::rating::InMemoryRatingRepository;
    use crate::infrastructure::store::InMemoryStoreRepository;

    fn create_service(state: &SharedMemory) -> StoreService {
        StoreService::new(
            Arc::new(InMemoryStoreRepository::new(state.clone())),
            Arc::new(InMemoryRatingRepository::new(state.clone())),
        )
    }

    fn owner_actor() -> Actor {
        Actor::new(UserId::generate(), Role::Owner)
    }

    fn create_request(name: &str) -> CreateStoreRequest {
        CreateStoreRequest {
            name: name.to_string(),
            address: "1 Main St".to_string(),
        }
    }

    async fn rate(state: &SharedMemory, user_id: &UserId, store_id: &StoreId, value: i16) {
        let rating = Rating::new(
            RatingId::generate(),
            user_id.clone(),
            store_id.clone(),
            RatingValue::new(value).unwrap(),
        );

        state.lock().await.ratings.insert(
            (
                user_id.as_str().to_string(),
                store_id.as_str().to_string(),
            ),
            rating,
        );
    }

    #[tokio::test]
    async fn test_owner_creates_store() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let actor = owner_actor();

        let store = service
            .create(&actor, create_request("Corner Bakery"))
            .await
            .unwrap();

        assert_eq!(store.name(), "Corner Bakery");
        assert_eq!(store.owner_id(), &actor.id);
        assert_eq!(store.aggregate_rating(), None);
    }

    #[tokio::test]
    async fn test_non_owner_roles_cannot_create() {
        let state = MemoryState::shared();
        let service = create_service(&state);

        for role in [Role::Admin, Role::User] {
            let actor = Actor::new(UserId::generate(), role);
            let result = service.create(&actor, create_request("Corner Bakery")).await;
            assert!(matches!(result, Err(DomainError::Permission { .. })));
        }
    }

    #[tokio::test]
    async fn test_create_rejects_bad_fields() {
        let state = MemoryState::shared();
        let service = create_service(&state);

        let result = service.create(&owner_actor(), create_request("")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        let result = service
            .create(
                &owner_actor(),
                CreateStoreRequest {
                    name: "x".repeat(61),
                    address: "1 Main St".to_string(),
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_owner_updates_own_store() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let actor = owner_actor();

        let store = service
            .create(&actor, create_request("Corner Bakery"))
            .await
            .unwrap();

        let updated = service
            .update(
                &actor,
                store.id().as_str(),
                UpdateStoreRequest {
                    name: Some("Corner Cafe".to_string()),
                    address: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name(), "Corner Cafe");
        assert_eq!(updated.address(), "1 Main St");
    }

    #[tokio::test]
    async fn test_foreign_owner_cannot_update() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let actor = owner_actor();

        let store = service
            .create(&actor, create_request("Corner Bakery"))
            .await
            .unwrap();

        let intruder = owner_actor();
        let result = service
            .update(
                &intruder,
                store.id().as_str(),
                UpdateStoreRequest {
                    name: Some("Hijacked".to_string()),
                    address: None,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::Permission { .. })));

        // The record is unchanged
        let unchanged = service.get(store.id().as_str(), None).await.unwrap();
        assert_eq!(unchanged.store.name(), "Corner Bakery");
    }

    #[tokio::test]
    async fn test_delete_requires_ownership_and_cascades() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let actor = owner_actor();

        let store = service
            .create(&actor, create_request("Corner Bakery"))
            .await
            .unwrap();
        rate(&state, &UserId::generate(), store.id(), 5).await;

        let intruder = owner_actor();
        let result = service.delete(&intruder, store.id().as_str()).await;
        assert!(matches!(result, Err(DomainError::Permission { .. })));

        service.delete(&actor, store.id().as_str()).await.unwrap();

        let result = service.get(store.id().as_str(), None).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert!(state.lock().await.ratings.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_and_malformed() {
        let state = MemoryState::shared();
        let service = create_service(&state);

        let result = service.get(StoreId::generate().as_str(), None).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = service.get("not a store id", None).await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_list_attaches_own_rating() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let owner = owner_actor();
        let rater = UserId::generate();

        let rated = service
            .create(&owner, create_request("Corner Bakery"))
            .await
            .unwrap();
        let unrated = service
            .create(&owner, create_request("Hardware Depot"))
            .await
            .unwrap();
        rate(&state, &rater, rated.id(), 4).await;

        let views = service
            .list(&StoreFilter::default(), Some(&rater))
            .await
            .unwrap();
        assert_eq!(views.len(), 2);

        for view in &views {
            if view.store.id() == rated.id() {
                assert_eq!(view.my_rating.map(|v| v.get()), Some(4));
            } else {
                assert_eq!(view.store.id(), unrated.id());
                assert_eq!(view.my_rating, None);
            }
        }

        let anonymous = service.list(&StoreFilter::default(), None).await.unwrap();
        assert!(anonymous.iter().all(|v| v.my_rating.is_none()));
    }

    #[tokio::test]
    async fn test_list_owned_includes_rating_rows() {
        let state = MemoryState::shared();
        let service = create_service(&state);
        let actor = owner_actor();
        let other = owner_actor();

        let mine = service
            .create(&actor, create_request("Corner Bakery"))
            .await
            .unwrap();
        service
            .create(&other, create_request("Hardware Depot"))
            .await
            .unwrap();

        rate(&state, &UserId::generate(), mine.id(), 5).await;
        rate(&state, &UserId::generate(), mine.id(), 3).await;

        let owned = service.list_owned(&actor).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].store.id(), mine.id());
        assert_eq!(owned[0].ratings.len(), 2);

        // A user-role actor owns nothing
        let none = service
            .list_owned(&Actor::new(UserId::generate(), Role::User))
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
