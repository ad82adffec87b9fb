//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::dashboard::DashboardService;
use crate::infrastructure::rating::RatingService;
use crate::infrastructure::store::StoreService;
use crate::infrastructure::user::UserService;

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub store_service: Arc<StoreService>,
    pub rating_service: Arc<RatingService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<UserService>,
        store_service: Arc<StoreService>,
        rating_service: Arc<RatingService>,
        dashboard_service: Arc<DashboardService>,
    ) -> Self {
        Self {
            user_service,
            store_service,
            rating_service,
            dashboard_service,
        }
    }
}
