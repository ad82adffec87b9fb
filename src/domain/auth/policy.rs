//! Role-based access policy
//!
//! The whole policy is one table evaluated by [`authorize`]: a pure function
//! over (role, action, resource ownership) with no I/O and no framework hooks.
//! The acting identity is always an explicit parameter, never ambient state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Role attached to a user account. Fixed at sign-up; nothing mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator - reporting and account management
    Admin,
    /// Regular account - submits store ratings
    User,
    /// Store owner - manages stores they own
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Owner => "owner",
        }
    }

    /// Parse a stored role string. Unknown values are rejected rather than
    /// defaulted: a role decides what an account may do.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Action gated by the policy. The set is closed: handlers map their routes
/// onto these five, nothing else is ever authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDashboard,
    CreateStore,
    EditStore,
    DeleteStore,
    SubmitRating,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "view_dashboard",
            Self::CreateStore => "create_store",
            Self::EditStore => "edit_store",
            Self::DeleteStore => "delete_store",
            Self::SubmitRating => "submit_rating",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated identity performing a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// Ownership view of a resource, for actions that require the actor to own it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedResource {
    pub owner_id: UserId,
}

impl OwnedResource {
    pub fn new(owner_id: UserId) -> Self {
        Self { owner_id }
    }
}

/// Why a request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The actor's role is not in the allowed set for the action
    InsufficientRole,
    /// The role allows the action, but only on resources the actor owns
    NotResourceOwner,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientRole => write!(f, "insufficient role"),
            Self::NotResourceOwner => write!(f, "not resource owner"),
        }
    }
}

/// A denied authorization decision, carrying enough context for logs and
/// user-facing messages
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("role '{actor_role}' may not {action}: {reason}")]
pub struct Denial {
    pub actor_role: Role,
    pub action: Action,
    pub reason: DenyReason,
}

impl From<Denial> for DomainError {
    fn from(denial: Denial) -> Self {
        DomainError::permission(denial.to_string())
    }
}

/// Decide whether `actor` may perform `action`, optionally against a resource
/// whose ownership matters.
///
/// Rules, first match wins:
/// - `ViewDashboard`: admin only.
/// - `CreateStore`: owner only.
/// - `EditStore` / `DeleteStore`: owner only, and the resource must belong to
///   the actor. Calling these without a resource denies.
/// - `SubmitRating`: user only.
/// - Everything else: deny.
pub fn authorize(
    actor: &Actor,
    action: Action,
    resource: Option<&OwnedResource>,
) -> Result<(), Denial> {
    let deny = |reason| {
        Err(Denial {
            actor_role: actor.role,
            action,
            reason,
        })
    };

    match action {
        Action::ViewDashboard => match actor.role {
            Role::Admin => Ok(()),
            _ => deny(DenyReason::InsufficientRole),
        },
        Action::CreateStore => match actor.role {
            Role::Owner => Ok(()),
            _ => deny(DenyReason::InsufficientRole),
        },
        Action::EditStore | Action::DeleteStore => match actor.role {
            Role::Owner => match resource {
                Some(resource) if resource.owner_id == actor.id => Ok(()),
                _ => deny(DenyReason::NotResourceOwner),
            },
            _ => deny(DenyReason::InsufficientRole),
        },
        Action::SubmitRating => match actor.role {
            Role::User => Ok(()),
            _ => deny(DenyReason::InsufficientRole),
        },
    }
}
