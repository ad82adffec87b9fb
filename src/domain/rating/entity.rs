//! Rating entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_rating_id, validate_rating_value, RatingValidationError};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;

/// Rating identifier - opaque token, minted as a UUID v4 string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RatingId(String);

impl RatingId {
    /// Create a new RatingId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, RatingValidationError> {
        let id = id.into();
        validate_rating_id(&id)?;
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

impl TryFrom<String> for RatingId {
    type Error = RatingValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingId> for String {
    fn from(id: RatingId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rating value, guaranteed in [1, 5]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct RatingValue(i16);

impl RatingValue {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    /// Create a new RatingValue after range validation
    pub fn new(value: i16) -> Result<Self, RatingValidationError> {
        validate_rating_value(value)?;
        Ok(Self(value))
    }

    /// Get the inner integer value
    pub fn get(&self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for RatingValue {
    type Error = RatingValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for i16 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for RatingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rating entity
///
/// At most one rating exists per (user, store) pair; a resubmission updates
/// the existing record in place, keeping its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Unique identifier
    id: RatingId,
    /// The user who submitted this rating
    user_id: UserId,
    /// The store being rated
    store_id: StoreId,
    /// The submitted value, 1 to 5
    value: RatingValue,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Rating {
    /// Create a new rating
    pub fn new(id: RatingId, user_id: UserId, store_id: StoreId, value: RatingValue) -> Self {
        let now = Utc::now();

        Self {
            id,
            user_id,
            store_id,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a rating from stored fields
    pub(crate) fn restore(
        id: RatingId,
        user_id: UserId,
        store_id: StoreId,
        value: RatingValue,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            store_id,
            value,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &RatingId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    pub fn value(&self) -> RatingValue {
        self.value
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace the value on resubmission
    pub fn set_value(&mut self, value: RatingValue) {
        self.value = value;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
