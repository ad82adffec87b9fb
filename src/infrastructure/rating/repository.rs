//! In-memory rating repository and transaction

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::rating::{Rating, RatingRepository, RatingTxn};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::memory::{MemoryState, SharedMemory};

/// In-memory implementation of RatingRepository
#[derive(Debug, Clone)]
pub struct InMemoryRatingRepository {
    state: SharedMemory,
}

impl InMemoryRatingRepository {
    /// Create a repository over a shared dataset
    pub fn new(state: SharedMemory) -> Self {
        Self { state }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn get(
        &self,
        user_id: &UserId,
        store_id: &StoreId,
    ) -> Result<Option<Rating>, DomainError> {
        let state = self.state.lock().await;
        Ok(state
            .ratings
            .get(&(user_id.as_str().to_string(), store_id.as_str().to_string()))
            .cloned())
    }

    async fn list_for_store(&self, store_id: &StoreId) -> Result<Vec<Rating>, DomainError> {
        let state = self.state.lock().await;

        let mut ratings: Vec<Rating> = state
            .ratings
            .values()
            .filter(|r| r.store_id() == store_id)
            .cloned()
            .collect();
        ratings.sort_by_key(|r| r.created_at());

        Ok(ratings)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Rating>, DomainError> {
        let state = self.state.lock().await;

        let mut ratings: Vec<Rating> = state
            .ratings
            .values()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect();
        ratings.sort_by_key(|r| r.created_at());

        Ok(ratings)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let state = self.state.lock().await;
        Ok(state.ratings.len() as u64)
    }

    async fn begin(&self, store_id: &StoreId) -> Result<Box<dyn RatingTxn>, DomainError> {
        // Taking the guard first serializes transactions; two submissions for
        // one store can never interleave between existing() and commit().
        let state = self.state.clone().lock_owned().await;

        if !state.stores.contains_key(store_id.as_str()) {
            return Err(DomainError::not_found(format!(
                "Store '{}' not found",
                store_id.as_str()
            )));
        }

        Ok(Box::new(InMemoryRatingTxn {
            state,
            store_id: store_id.clone(),
            staged_rating: None,
            staged_aggregate: None,
        }))
    }
}

/// Transaction over one store's ratings.
///
/// Holds the dataset guard for its whole lifetime and stages writes on the
/// side; commit publishes them into the dataset, drop discards them.
struct InMemoryRatingTxn {
    state: OwnedMutexGuard<MemoryState>,
    store_id: StoreId,
    staged_rating: Option<Rating>,
    staged_aggregate: Option<Option<f64>>,
}

#[async_trait]
impl RatingTxn for InMemoryRatingTxn {
    async fn existing(&mut self, user_id: &UserId) -> Result<Option<Rating>, DomainError> {
        if let Some(staged) = &self.staged_rating {
            if staged.user_id() == user_id {
                return Ok(Some(staged.clone()));
            }
        }

        Ok(self
            .state
            .ratings
            .get(&(
                user_id.as_str().to_string(),
                self.store_id.as_str().to_string(),
            ))
            .cloned())
    }

    async fn save(&mut self, rating: &Rating) -> Result<(), DomainError> {
        if rating.store_id() != &self.store_id {
            return Err(DomainError::internal(format!(
                "Rating for store '{}' saved in a transaction scoped to store '{}'",
                rating.store_id().as_str(),
                self.store_id.as_str()
            )));
        }

        self.staged_rating = Some(rating.clone());
        Ok(())
    }

    async fn recompute_store_aggregate(&mut self) -> Result<Option<f64>, DomainError> {
        let staged_user = self.staged_rating.as_ref().map(|r| r.user_id());

        let mut values: Vec<i16> = self
            .state
            .ratings
            .values()
            .filter(|r| r.store_id() == &self.store_id)
            .filter(|r| staged_user != Some(r.user_id()))
            .map(|r| r.value().get())
            .collect();

        if let Some(staged) = &self.staged_rating {
            values.push(staged.value().get());
        }

        let aggregate = if values.is_empty() {
            None
        } else {
            let sum: f64 = values.iter().map(|v| f64::from(*v)).sum();
            Some(sum / values.len() as f64)
        };

        self.staged_aggregate = Some(aggregate);
        Ok(aggregate)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let Self {
            mut state,
            store_id,
            staged_rating,
            staged_aggregate,
        } = *self;

        if let Some(rating) = staged_rating {
            state.ratings.insert(
                (
                    rating.user_id().as_str().to_string(),
                    rating.store_id().as_str().to_string(),
                ),
                rating,
            );
        }

        if let Some(aggregate) = staged_aggregate {
            // The guard has been held since begin(), so the store checked
            // there must still be present.
            match state.stores.get_mut(store_id.as_str()) {
                Some(store) => store.set_aggregate_rating(aggregate),
                None => {
                    return Err(DomainError::internal(format!(
                        "Store '{}' disappeared during a rating transaction",
                        store_id.as_str()
                    )))
                }
            }
        }

        Ok(())
    }
}
