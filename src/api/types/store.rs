//! Store request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Store;
use crate::infrastructure::store::{StoreView, StoreWithRatings};

use super::rating::RatingResponse;

/// Body for `POST /v1/stores`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoreBody {
    pub name: String,
    pub address: String,
}

/// Body for `PUT /v1/stores/{id}`; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStoreBody {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Store as exposed over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub owner_id: String,
    /// Mean of all submitted ratings, absent until the first one lands
    pub aggregate_rating: Option<f64>,
    /// The requesting user's own rating, when an actor was resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_rating: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreResponse {
    /// Create a response from a domain store, without a viewer rating
    pub fn from_domain(store: &Store) -> Self {
        Self {
            id: store.id().as_str().to_string(),
            name: store.name().to_string(),
            address: store.address().to_string(),
            owner_id: store.owner_id().as_str().to_string(),
            aggregate_rating: store.aggregate_rating(),
            my_rating: None,
            created_at: store.created_at(),
            updated_at: store.updated_at(),
        }
    }

    /// Create a response from a store view, carrying the viewer's own rating
    pub fn from_view(view: &StoreView) -> Self {
        let mut response = Self::from_domain(&view.store);
        response.my_rating = view.my_rating.map(|value| value.get());
        response
    }
}

/// List stores response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoresResponse {
    pub data: Vec<StoreResponse>,
    pub total: usize,
}

impl StoresResponse {
    /// Create a new stores response
    pub fn new(stores: Vec<StoreResponse>) -> Self {
        Self {
            total: stores.len(),
            data: stores,
        }
    }
}

/// A store with its rating rows, for `GET /v1/my/stores`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedStoreResponse {
    #[serde(flatten)]
    pub store: StoreResponse,
    pub ratings: Vec<RatingResponse>,
}

impl OwnedStoreResponse {
    /// Create a response from a store with its ratings
    pub fn from_domain(entry: &StoreWithRatings) -> Self {
        Self {
            store: StoreResponse::from_domain(&entry.store),
            ratings: entry.ratings.iter().map(RatingResponse::from_domain).collect(),
        }
    }
}

/// List owned stores response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedStoresResponse {
    pub data: Vec<OwnedStoreResponse>,
    pub total: usize,
}

impl OwnedStoresResponse {
    /// Create a new owned stores response
    pub fn new(stores: Vec<OwnedStoreResponse>) -> Self {
        Self {
            total: stores.len(),
            data: stores,
        }
    }
}

/// Query parameters for `GET /v1/stores` and `GET /admin/stores`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListStoresQuery {
    pub search: Option<String>,
}
