//! Domain layer - Core business logic and entities

pub mod auth;
pub mod error;
pub mod rating;
pub mod store;
pub mod user;

pub use auth::{authorize, Action, Actor, Denial, DenyReason, OwnedResource, Role};
pub use error::DomainError;
pub use rating::{Rating, RatingId, RatingRepository, RatingTxn, RatingValue};
pub use store::{Store, StoreFilter, StoreId, StoreRepository};
pub use user::{User, UserFilter, UserId, UserRepository};
