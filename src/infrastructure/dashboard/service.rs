//! Admin dashboard aggregation

use std::sync::Arc;

use crate::domain::auth::{authorize, Action, Actor};
use crate::domain::rating::RatingRepository;
use crate::domain::store::StoreRepository;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Aggregate counts shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_stores: u64,
    pub total_ratings: u64,
}

/// Aggregator behind the admin dashboard.
///
/// The three counts run concurrently and are not transactionally consistent
/// with each other; the dashboard is a display surface, not an audit.
#[derive(Debug)]
pub struct DashboardService {
    users: Arc<dyn UserRepository>,
    stores: Arc<dyn StoreRepository>,
    ratings: Arc<dyn RatingRepository>,
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(
        users: Arc<dyn UserRepository>,
        stores: Arc<dyn StoreRepository>,
        ratings: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            users,
            stores,
            ratings,
        }
    }

    /// Aggregate counts for `actor`, who must hold the admin role
    pub async fn stats(&self, actor: &Actor) -> Result<DashboardStats, DomainError> {
        authorize(actor, Action::ViewDashboard, None)?;

        let (total_users, total_stores, total_ratings) = tokio::try_join!(
            self.users.count(),
            self.stores.count(),
            self.ratings.count()
        )?;

        Ok(DashboardStats {
            total_users,
            total_stores,
            total_ratings,
        })
    }
}
