//! Rating repository and transaction traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Rating;
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for rating storage
///
/// Plain reads go through the repository directly. Writes never do: every
/// rating write happens inside a [`RatingTxn`] obtained from [`begin`],
/// which scopes a datastore transaction to one store.
///
/// [`begin`]: RatingRepository::begin
#[async_trait]
pub trait RatingRepository: Send + Sync + Debug {
    /// Get the rating one user gave one store, if any
    async fn get(
        &self,
        user_id: &UserId,
        store_id: &StoreId,
    ) -> Result<Option<Rating>, DomainError>;

    /// List all ratings for a store, ordered by creation time
    async fn list_for_store(&self, store_id: &StoreId) -> Result<Vec<Rating>, DomainError>;

    /// List all ratings submitted by a user
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Rating>, DomainError>;

    /// Count all ratings
    async fn count(&self) -> Result<u64, DomainError>;

    /// Open a write transaction scoped to `store_id`.
    ///
    /// Fails with NotFound when the store does not exist. While the returned
    /// handle lives, concurrent transactions for the same store wait, so two
    /// submissions can never both observe "no existing rating" for one
    /// (user, store) pair.
    async fn begin(&self, store_id: &StoreId) -> Result<Box<dyn RatingTxn>, DomainError>;
}

/// A write transaction over the ratings of one store.
///
/// The handle follows a scoped acquisition discipline: [`commit`] publishes
/// the staged rating and the recomputed store aggregate together, and
/// dropping the handle on any other exit path rolls everything back. There
/// is no partial outcome.
///
/// [`commit`]: RatingTxn::commit
#[async_trait]
pub trait RatingTxn: Send {
    /// The rating `user_id` already gave this store, if any
    async fn existing(&mut self, user_id: &UserId) -> Result<Option<Rating>, DomainError>;

    /// Stage a create-or-update for the rating. Keyed by (user, store); a
    /// uniqueness violation raced in by the datastore maps to Conflict.
    async fn save(&mut self, rating: &Rating) -> Result<(), DomainError>;

    /// Recompute the store's aggregate rating from all its rating values,
    /// including the staged write, and stage it on the store record. Returns
    /// the new aggregate, None when the store has no ratings.
    async fn recompute_store_aggregate(&mut self) -> Result<Option<f64>, DomainError>;

    /// Publish all staged writes atomically
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;
}
