//! User domain
//!
//! Domain types for user accounts: the entity, field validation, and the
//! repository trait persistence backends implement.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::{UserFilter, UserRepository};
pub use validation::{
    validate_credential, validate_email, validate_user_id, validate_user_name,
    UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
