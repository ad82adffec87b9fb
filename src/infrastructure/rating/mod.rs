//! Rating infrastructure module
//!
//! Repository implementations (in-memory and PostgreSQL) and the rating
//! service running the transactional submit-and-recompute flow.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresRatingRepository;
pub use repository::InMemoryRatingRepository;
pub use service::{RatingService, RatingSubmission};
