//! Store domain
//!
//! Domain types for stores: the entity with its derived aggregate rating,
//! field validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Store, StoreId};
pub use repository::{StoreFilter, StoreRepository};
pub use validation::{
    validate_store_address, validate_store_id, validate_store_name, StoreValidationError,
};

#[cfg(test)]
pub use repository::mock::MockStoreRepository;
