//! Rately - Store Rating Platform API
//!
//! A role-aware rating service with support for:
//! - Public store browsing with live aggregate ratings
//! - One revisable rating per user per store
//! - Owner-managed store listings with per-rating detail
//! - Admin account management and platform-wide reporting
//! - In-memory or PostgreSQL persistence

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::StorageBackend;
use domain::{RatingRepository, Role, StoreRepository, UserRepository};
use infrastructure::dashboard::DashboardService;
use infrastructure::memory::MemoryState;
use infrastructure::postgres::connect_pool;
use infrastructure::rating::{InMemoryRatingRepository, PostgresRatingRepository, RatingService};
use infrastructure::store::{InMemoryStoreRepository, PostgresStoreRepository, StoreService};
use infrastructure::user::{
    CreateUserRequest, InMemoryUserRepository, PostgresUserRepository, UserService,
};
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let (user_repository, store_repository, rating_repository): (
        Arc<dyn UserRepository>,
        Arc<dyn StoreRepository>,
        Arc<dyn RatingRepository>,
    ) = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage; data will not survive a restart");
            let state = MemoryState::shared();
            (
                Arc::new(InMemoryUserRepository::new(state.clone())),
                Arc::new(InMemoryStoreRepository::new(state.clone())),
                Arc::new(InMemoryRatingRepository::new(state)),
            )
        }
        StorageBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&config.storage.postgres).await?;
            info!("PostgreSQL connection established");
            (
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresStoreRepository::new(pool.clone())),
                Arc::new(PostgresRatingRepository::new(pool)),
            )
        }
    };

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let store_service = Arc::new(StoreService::new(
        store_repository.clone(),
        rating_repository.clone(),
    ));
    let rating_service = Arc::new(RatingService::new(rating_repository.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        user_repository,
        store_repository,
        rating_repository,
    ));

    // Bootstrap an admin account on an empty dataset
    create_initial_admin(&user_service).await?;

    Ok(AppState::new(
        user_service,
        store_service,
        rating_service,
        dashboard_service,
    ))
}

/// Create an initial admin account if no users exist
///
/// Without at least one admin the account-management surface is
/// unreachable, so a fresh deployment seeds one and prints its id. The id
/// is what operators send in the `x-actor-id` header.
async fn create_initial_admin(user_service: &UserService) -> anyhow::Result<()> {
    if user_service.count().await? > 0 {
        return Ok(());
    }

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@rately.local".to_string());

    // The credential is held opaquely and verified upstream; a random value
    // keeps the seeded account unusable until an operator rotates it.
    let request = CreateUserRequest {
        name: "Administrator".to_string(),
        email: email.clone(),
        credential: uuid::Uuid::new_v4().to_string(),
        role: Role::Admin,
    };

    let admin = user_service.create(request).await?;

    info!("===========================================");
    info!("Initial admin account created!");
    info!("Email: {}", email);
    info!("Actor id: {}", admin.id());
    info!("Pass this id as the x-actor-id header to reach /admin routes.");
    info!("===========================================");

    Ok(())
}
