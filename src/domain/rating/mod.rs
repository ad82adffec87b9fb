//! Rating domain
//!
//! Domain types for ratings: the entity, the range-checked value type, and
//! the repository/transaction traits that keep the one-rating-per-user-per-
//! store invariant intact under concurrency.

mod entity;
mod repository;
mod validation;

pub use entity::{Rating, RatingId, RatingValue};
pub use repository::{RatingRepository, RatingTxn};
pub use validation::{validate_rating_id, validate_rating_value, RatingValidationError};
