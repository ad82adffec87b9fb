//! Wire types for the HTTP API

pub mod dashboard;
pub mod error;
pub mod json;
pub mod rating;
pub mod store;
pub mod user;

pub use dashboard::DashboardResponse;
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use rating::{RateStoreBody, RatingResponse, SubmitRatingResponse};
pub use store::{
    CreateStoreBody, ListStoresQuery, OwnedStoreResponse, OwnedStoresResponse, StoreResponse,
    StoresResponse, UpdateStoreBody,
};
pub use user::{CreateUserBody, ListUsersQuery, SignupBody, UserResponse, UsersResponse};
