//! In-memory user repository implementation

use async_trait::async_trait;

use crate::domain::user::{User, UserFilter, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::memory::SharedMemory;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    state: SharedMemory,
}

impl InMemoryUserRepository {
    /// Create a repository over a shared dataset
    pub fn new(state: SharedMemory) -> Self {
        Self { state }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let state = self.state.lock().await;
        Ok(state.users.get(id.as_str()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        let id = user.id().as_str().to_string();

        if state.users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if state
            .users
            .values()
            .any(|u| u.email().eq_ignore_ascii_case(user.email()))
        {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                user.email()
            )));
        }

        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        let state = self.state.lock().await;

        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect();
        users.sort_by_key(|u| u.created_at());

        Ok(users)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let state = self.state.lock().await;
        Ok(state.users.len() as u64)
    }
}
