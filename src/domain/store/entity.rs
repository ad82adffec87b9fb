//! Store entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_store_address, validate_store_id, validate_store_name, StoreValidationError,
};
use crate::domain::user::UserId;

/// Store identifier - opaque token, minted as a UUID v4 string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoreId(String);

impl StoreId {
    /// Create a new StoreId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, StoreValidationError> {
        let id = id.into();
        validate_store_id(&id)?;
        Ok(Self(id))
    }

    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StoreId {
    type Error = StoreValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StoreId> for String {
    fn from(id: StoreId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store entity
///
/// `aggregate_rating` is derived data: the mean of all rating values for this
/// store, `None` while no ratings exist. It is recomputed inside the rating
/// transaction on every rating write and never set from user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Unique identifier
    id: StoreId,
    /// Display name, at most 60 characters
    name: String,
    /// Postal address, at most 400 characters
    address: String,
    /// The owner-role user this store belongs to
    owner_id: UserId,
    /// Mean of all rating values, None with zero ratings
    aggregate_rating: Option<f64>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Store {
    /// Create a new store after validating name and address
    pub fn new(
        id: StoreId,
        name: impl Into<String>,
        address: impl Into<String>,
        owner_id: UserId,
    ) -> Result<Self, StoreValidationError> {
        let name = name.into();
        let address = address.into();

        validate_store_name(&name)?;
        validate_store_address(&address)?;

        let now = Utc::now();

        Ok(Self {
            id,
            name,
            address,
            owner_id,
            aggregate_rating: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a store from stored fields
    pub(crate) fn restore(
        id: StoreId,
        name: String,
        address: String,
        owner_id: UserId,
        aggregate_rating: Option<f64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            owner_id,
            aggregate_rating,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &StoreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn aggregate_rating(&self) -> Option<f64> {
        self.aggregate_rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), StoreValidationError> {
        let name = name.into();
        validate_store_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the address
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), StoreValidationError> {
        let address = address.into();
        validate_store_address(&address)?;
        self.address = address;
        self.touch();
        Ok(())
    }

    /// Replace the derived aggregate. Only the rating transaction calls this.
    pub fn set_aggregate_rating(&mut self, aggregate: Option<f64>) {
        self.aggregate_rating = aggregate;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
