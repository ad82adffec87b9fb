//! Infrastructure layer - Service and persistence implementations

pub mod dashboard;
pub mod logging;
pub mod memory;
pub mod observability;
pub mod postgres;
pub mod rating;
pub mod store;
pub mod user;
