//! Admin API endpoints for reporting and account management

pub mod dashboard;
pub mod stores;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        // Reporting
        .route("/dashboard", get(dashboard::get_dashboard))
        // Account management
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        // Store oversight
        .route("/stores", get(stores::list_stores))
}
