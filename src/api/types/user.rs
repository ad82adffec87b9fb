//! User account request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::auth::Role;
use crate::domain::User;

/// Body for `POST /auth/signup`
#[derive(Debug, Clone, Deserialize)]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub credential: String,
}

/// Body for `POST /admin/users`; unlike signup, the role is chosen freely
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserBody {
    pub name: String,
    pub email: String,
    pub credential: String,
    pub role: Role,
}

/// User account as exposed over the wire; the credential never leaves the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// Create a response from a domain user
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            role: user.role(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<UserResponse>,
    pub total: usize,
}

impl UsersResponse {
    /// Create a new users response
    pub fn new(users: Vec<UserResponse>) -> Self {
        Self {
            total: users.len(),
            data: users,
        }
    }
}

/// Query parameters for `GET /admin/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<Role>,
    pub search: Option<String>,
}
