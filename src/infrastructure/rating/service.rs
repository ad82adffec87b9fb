//! Rating submission service

use std::sync::Arc;

use crate::domain::auth::{authorize, Action, Actor};
use crate::domain::rating::{Rating, RatingId, RatingRepository, RatingValue};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::observability::record_rating_submission;

/// Outcome of a rating submission
#[derive(Debug, Clone)]
pub struct RatingSubmission {
    /// The rating as persisted
    pub rating: Rating,
    /// The store's aggregate after this submission
    pub aggregate_rating: Option<f64>,
    /// True when this submission created the rating, false when it updated
    /// an earlier one in place
    pub created: bool,
}

/// Service running the rating upsert.
///
/// A submission is one transaction: find the actor's existing rating for the
/// store, create or update it, recompute the store's aggregate, commit. Any
/// failure in between drops the transaction and rolls the whole thing back.
#[derive(Debug)]
pub struct RatingService {
    repository: Arc<dyn RatingRepository>,
}

impl RatingService {
    /// Create a new rating service
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    /// Submit a rating for a store on behalf of `actor`
    pub async fn submit(
        &self,
        actor: &Actor,
        store_id: &str,
        value: i16,
    ) -> Result<RatingSubmission, DomainError> {
        // Denials and bad values must surface before any datastore access
        authorize(actor, Action::SubmitRating, None)?;

        let value =
            RatingValue::new(value).map_err(|e| DomainError::validation(e.to_string()))?;
        let store_id =
            StoreId::new(store_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut txn = self.repository.begin(&store_id).await?;

        let (rating, created) = match txn.existing(&actor.id).await? {
            Some(mut existing) => {
                existing.set_value(value);
                (existing, false)
            }
            None => (
                Rating::new(RatingId::generate(), actor.id.clone(), store_id.clone(), value),
                true,
            ),
        };

        txn.save(&rating).await?;
        let aggregate_rating = txn.recompute_store_aggregate().await?;
        txn.commit().await?;

        record_rating_submission(created);

        tracing::debug!(
            user_id = actor.id.as_str(),
            store_id = store_id.as_str(),
            value = rating.value().get(),
            created,
            "Rating submitted"
        );

        Ok(RatingSubmission {
            rating,
            aggregate_rating,
            created,
        })
    }

    /// The rating `user_id` gave `store_id`, if any
    pub async fn rating_for(
        &self,
        user_id: &UserId,
        store_id: &StoreId,
    ) -> Result<Option<Rating>, DomainError> {
        self.repository.get(user_id, store_id).await
    }

    /// Count all ratings
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }
}
