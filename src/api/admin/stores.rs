//! Store administration endpoints

use axum::extract::{Query, State};
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ListStoresQuery, StoreResponse, StoresResponse};
use crate::domain::store::StoreFilter;

/// GET /admin/stores
pub async fn list_stores(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Query(query): Query<ListStoresQuery>,
) -> Result<Json<StoresResponse>, ApiError> {
    debug!("Admin listing stores");

    let filter = StoreFilter {
        search: query.search,
    };

    let views = state
        .store_service
        .list(&filter, None)
        .await
        .map_err(ApiError::from)?;

    let stores = views
        .iter()
        .map(|view| StoreResponse::from_domain(&view.store))
        .collect();

    Ok(Json(StoresResponse::new(stores)))
}
