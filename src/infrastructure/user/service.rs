//! User service for registration and account management

use std::sync::Arc;

use crate::domain::auth::Role;
use crate::domain::user::{User, UserFilter, UserId, UserRepository};
use crate::domain::DomainError;

/// Request for registering a new account through the public sign-up
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub credential: String,
}

/// Request for creating a user with an explicit role
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub credential: String,
    pub role: Role,
}

/// User service for registration and account management
///
/// Role assignment happens exactly once, at creation. Public sign-up always
/// lands in the `user` role; creating owner or admin accounts goes through
/// the admin surface, which the request layer gates.
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a self-service account
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        self.create(CreateUserRequest {
            name: request.name,
            email: request.email,
            credential: request.credential,
            role: Role::User,
        })
        .await
    }

    /// Create a user with an explicit role
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        // Check email uniqueness up front for a clean conflict message; the
        // repository still enforces it against races.
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                request.email
            )));
        }

        let user = User::new(
            UserId::generate(),
            &request.name,
            &request.email,
            &request.credential,
            request.role,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(user).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        let user_id = UserId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        self.repository
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// List users matching the filter
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        self.repository.list(filter).await
    }

    /// Count all users
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }
}
