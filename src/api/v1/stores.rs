//! Store browsing, management and rating endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::debug;

use crate::api::middleware::{OptionalActor, RequireActor};
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateStoreBody, Json, ListStoresQuery, OwnedStoreResponse, OwnedStoresResponse,
    RateStoreBody, StoreResponse, StoresResponse, SubmitRatingResponse, UpdateStoreBody,
};
use crate::domain::store::StoreFilter;
use crate::infrastructure::store::{CreateStoreRequest, UpdateStoreRequest};

/// GET /v1/stores
///
/// Public listing. With a resolvable actor header, each store carries
/// that user's own rating.
pub async fn list_stores(
    State(state): State<AppState>,
    OptionalActor(actor): OptionalActor,
    Query(query): Query<ListStoresQuery>,
) -> Result<Json<StoresResponse>, ApiError> {
    let filter = StoreFilter {
        search: query.search,
    };
    let viewer = actor.as_ref().map(|a| &a.id);

    let views = state
        .store_service
        .list(&filter, viewer)
        .await
        .map_err(ApiError::from)?;

    let stores = views.iter().map(StoreResponse::from_view).collect();

    Ok(Json(StoresResponse::new(stores)))
}

/// GET /v1/stores/:store_id
pub async fn get_store(
    State(state): State<AppState>,
    OptionalActor(actor): OptionalActor,
    Path(store_id): Path<String>,
) -> Result<Json<StoreResponse>, ApiError> {
    let viewer = actor.as_ref().map(|a| &a.id);

    let view = state
        .store_service
        .get(&store_id, viewer)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(StoreResponse::from_view(&view)))
}

/// POST /v1/stores
pub async fn create_store(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Json(body): Json<CreateStoreBody>,
) -> Result<(StatusCode, Json<StoreResponse>), ApiError> {
    debug!(actor_id = %actor.id, name = %body.name, "Creating store");

    let store = state
        .store_service
        .create(
            &actor,
            CreateStoreRequest {
                name: body.name,
                address: body.address,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(StoreResponse::from_domain(&store))))
}

/// PUT /v1/stores/:store_id
pub async fn update_store(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(store_id): Path<String>,
    Json(body): Json<UpdateStoreBody>,
) -> Result<Json<StoreResponse>, ApiError> {
    debug!(actor_id = %actor.id, store_id = %store_id, "Updating store");

    let store = state
        .store_service
        .update(
            &actor,
            &store_id,
            UpdateStoreRequest {
                name: body.name,
                address: body.address,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Json(StoreResponse::from_domain(&store)))
}

/// DELETE /v1/stores/:store_id
pub async fn delete_store(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(store_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(actor_id = %actor.id, store_id = %store_id, "Deleting store");

    state
        .store_service
        .delete(&actor, &store_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": store_id
    })))
}

/// PUT /v1/stores/:store_id/rating
///
/// Submit or revise the actor's rating for a store. Responds 201 when a
/// new rating was created, 200 when an existing one was updated in place.
pub async fn rate_store(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
    Path(store_id): Path<String>,
    Json(body): Json<RateStoreBody>,
) -> Result<(StatusCode, Json<SubmitRatingResponse>), ApiError> {
    let submission = state
        .rating_service
        .submit(&actor, &store_id, body.value)
        .await
        .map_err(ApiError::from)?;

    let status = if submission.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(SubmitRatingResponse::from_domain(&submission))))
}

/// GET /v1/my/stores
///
/// The actor's own stores, each with its full list of rating rows.
pub async fn list_my_stores(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Result<Json<OwnedStoresResponse>, ApiError> {
    let owned = state
        .store_service
        .list_owned(&actor)
        .await
        .map_err(ApiError::from)?;

    let stores = owned.iter().map(OwnedStoreResponse::from_domain).collect();

    Ok(Json(OwnedStoresResponse::new(stores)))
}
