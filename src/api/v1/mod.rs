//! v1 API endpoints

pub mod stores;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/stores", get(stores::list_stores).post(stores::create_store))
        .route(
            "/stores/{store_id}",
            get(stores::get_store)
                .put(stores::update_store)
                .delete(stores::delete_store),
        )
        .route("/stores/{store_id}/rating", put(stores::rate_store))
        .route("/my/stores", get(stores::list_my_stores))
}
