//! Admin gate for the management surface
//!
//! Account administration is a request-layer concern: the routes under
//! `/admin` that manage accounts are reachable only through this
//! extractor, while policy-governed actions are checked again inside
//! the services.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::Actor;

use super::actor::{extract_actor_id, resolve_actor};

/// Extractor that requires an actor with the admin role
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Actor);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id = extract_actor_id(&parts.headers)?;
        let actor = resolve_actor(&actor_id, state).await?;

        if !actor.role.is_admin() {
            return Err(ApiError::forbidden("Admin access required"));
        }

        debug!(actor_id = %actor.id, "Admin access granted");

        Ok(RequireAdmin(actor))
    }
}
