//! Platform reporting endpoints

use axum::extract::State;
use tracing::debug;

use crate::api::middleware::RequireActor;
use crate::api::state::AppState;
use crate::api::types::{ApiError, DashboardResponse, Json};

/// GET /admin/dashboard
///
/// Totals for users, stores and ratings. The policy gate lives inside
/// `DashboardService::stats`, so this route only needs a resolved actor.
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Result<Json<DashboardResponse>, ApiError> {
    debug!(actor_id = %actor.id, "Dashboard requested");

    let stats = state
        .dashboard_service
        .stats(&actor)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(DashboardResponse::from_domain(&stats)))
}
