//! Actor resolution middleware
//!
//! Upstream authentication is out of scope here: callers identify
//! themselves with an `x-actor-id` header and the extractors resolve
//! that to a stored user account.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::Actor;
use crate::domain::DomainError;

/// Header carrying the acting user's ID
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Extractor that requires a resolvable actor
#[derive(Debug, Clone)]
pub struct RequireActor(pub Actor);

impl FromRequestParts<AppState> for RequireActor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id = extract_actor_id(&parts.headers)?;
        let actor = resolve_actor(&actor_id, state).await?;

        Ok(RequireActor(actor))
    }
}

/// Extractor that resolves an actor when the header is present.
///
/// Yields `None` both when the header is missing and when it names an
/// unknown user, so public reads stay public.
#[derive(Debug, Clone)]
pub struct OptionalActor(pub Option<Actor>);

impl FromRequestParts<AppState> for OptionalActor {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = try_resolve_actor(&parts.headers, state).await;

        Ok(OptionalActor(actor))
    }
}

/// Extract the actor ID from the `x-actor-id` header
pub fn extract_actor_id(headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(value) = headers.get(ACTOR_HEADER) {
        let id = value
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid x-actor-id header encoding"))?
            .trim();

        if !id.is_empty() {
            return Ok(id.to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Identify the acting user via the 'x-actor-id' header",
    ))
}

/// Resolve an actor ID to a stored user account
pub async fn resolve_actor(actor_id: &str, state: &AppState) -> Result<Actor, ApiError> {
    let user = state.user_service.get(actor_id).await.map_err(|e| match e {
        DomainError::NotFound { .. } | DomainError::InvalidId { .. } => {
            ApiError::unauthorized(format!("Unknown actor '{}'", actor_id))
        }
        other => ApiError::from(other),
    })?;

    debug!(actor_id = %user.id(), role = user.role().as_str(), "Actor resolved");

    Ok(Actor::new(user.id().clone(), user.role()))
}

/// Try to resolve an actor, returning None if absent or unresolvable
pub async fn try_resolve_actor(headers: &HeaderMap, state: &AppState) -> Option<Actor> {
    let actor_id = extract_actor_id(headers).ok()?;

    match resolve_actor(&actor_id, state).await {
        Ok(actor) => Some(actor),
        Err(_) => {
            debug!(actor_id = %actor_id, "Actor header present but unresolvable");
            None
        }
    }
}
