//! API layer - HTTP endpoints and middleware

pub mod admin;
pub mod auth;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use middleware::{OptionalActor, RequireActor, RequireAdmin};
pub use router::{create_router, create_router_with_state};
pub use state::AppState;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::state::AppState;
    use crate::domain::auth::Role;
    use crate::infrastructure::dashboard::DashboardService;
    use crate::infrastructure::memory::MemoryState;
    use crate::infrastructure::rating::{InMemoryRatingRepository, RatingService};
    use crate::infrastructure::store::{InMemoryStoreRepository, StoreService};
    use crate::infrastructure::user::{CreateUserRequest, InMemoryUserRepository, UserService};

    /// Build an application state over a fresh in-memory dataset
    pub fn test_state() -> AppState {
        let memory = MemoryState::shared();

        let users = Arc::new(InMemoryUserRepository::new(memory.clone()));
        let stores = Arc::new(InMemoryStoreRepository::new(memory.clone()));
        let ratings = Arc::new(InMemoryRatingRepository::new(memory));

        AppState::new(
            Arc::new(UserService::new(users.clone())),
            Arc::new(StoreService::new(stores.clone(), ratings.clone())),
            Arc::new(RatingService::new(ratings.clone())),
            Arc::new(DashboardService::new(users, stores, ratings)),
        )
    }

    /// Seed a user account and return its ID for the actor header
    pub async fn seed_user(state: &AppState, name: &str, email: &str, role: Role) -> String {
        let user = state
            .user_service
            .create(CreateUserRequest {
                name: name.to_string(),
                email: email.to_string(),
                credential: "test-credential".to_string(),
                role,
            })
            .await
            .unwrap();

        user.id().as_str().to_string()
    }
}
