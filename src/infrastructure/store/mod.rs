//! Store infrastructure module
//!
//! Repository implementations (in-memory and PostgreSQL) and the store
//! service gating owner writes behind the access policy.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresStoreRepository;
pub use repository::InMemoryStoreRepository;
pub use service::{
    CreateStoreRequest, StoreService, StoreView, StoreWithRatings, UpdateStoreRequest,
};
