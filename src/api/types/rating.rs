//! Rating request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Rating;
use crate::infrastructure::rating::RatingSubmission;

/// Body for `PUT /v1/stores/{id}/rating`
#[derive(Debug, Clone, Deserialize)]
pub struct RateStoreBody {
    pub value: i16,
}

/// Rating row as exposed over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingResponse {
    pub id: String,
    pub user_id: String,
    pub store_id: String,
    pub value: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RatingResponse {
    /// Create a response from a domain rating
    pub fn from_domain(rating: &Rating) -> Self {
        Self {
            id: rating.id().as_str().to_string(),
            user_id: rating.user_id().as_str().to_string(),
            store_id: rating.store_id().as_str().to_string(),
            value: rating.value().get(),
            created_at: rating.created_at(),
            updated_at: rating.updated_at(),
        }
    }
}

/// Result of submitting a rating: the stored row plus the store's new mean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRatingResponse {
    pub rating: RatingResponse,
    pub aggregate_rating: Option<f64>,
}

impl SubmitRatingResponse {
    /// Create a response from a submission outcome
    pub fn from_domain(submission: &RatingSubmission) -> Self {
        Self {
            rating: RatingResponse::from_domain(&submission.rating),
            aggregate_rating: submission.aggregate_rating,
        }
    }
}
