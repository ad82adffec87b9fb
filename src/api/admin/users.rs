//! User account administration endpoints

use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateUserBody, Json, ListUsersQuery, UserResponse, UsersResponse,
};
use crate::domain::user::UserFilter;
use crate::infrastructure::user::CreateUserRequest;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UsersResponse>, ApiError> {
    debug!("Admin listing users");

    let filter = UserFilter {
        role: query.role,
        search: query.search,
    };

    let users = state
        .user_service
        .list(&filter)
        .await
        .map_err(ApiError::from)?;

    let users = users.iter().map(UserResponse::from_domain).collect();

    Ok(Json(UsersResponse::new(users)))
}

/// POST /admin/users
///
/// Creates an account with any role, including other admins and store
/// owners. Self-service signup only ever produces `user` accounts.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(
        admin_id = %admin.id,
        email = %body.email,
        role = body.role.as_str(),
        "Admin creating user"
    );

    let user = state
        .user_service
        .create(CreateUserRequest {
            name: body.name,
            email: body.email,
            credential: body.credential,
            role: body.role,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from_domain(&user))))
}
