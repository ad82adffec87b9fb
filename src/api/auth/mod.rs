//! Account self-service endpoints
//!
//! Signup is open; everything else on this router works on the resolved
//! actor. Authentication itself (passwords, sessions) lives upstream;
//! the credential is stored opaquely and never checked here.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::api::middleware::RequireActor;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SignupBody, UserResponse};
use crate::infrastructure::user::RegisterUserRequest;

/// Create the account router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/me", get(get_current_user))
}

/// POST /auth/signup
///
/// Self-service registration; the account always gets the `user` role.
/// Roles other than `user` are granted through the admin surface.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(email = %body.email, "Signup requested");

    let user = state
        .user_service
        .register(RegisterUserRequest {
            name: body.name,
            email: body.email,
            credential: body.credential,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from_domain(&user))))
}

/// GET /auth/me
pub async fn get_current_user(
    State(state): State<AppState>,
    RequireActor(actor): RequireActor,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .get(actor.id.as_str())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from_domain(&user)))
}
