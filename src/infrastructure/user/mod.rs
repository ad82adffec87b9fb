//! User infrastructure module
//!
//! Repository implementations (in-memory and PostgreSQL) and the user service
//! used for registration and account administration.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, RegisterUserRequest, UserService};
