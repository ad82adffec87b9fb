//! Rating validation utilities

use thiserror::Error;

/// Errors that can occur during rating validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingValidationError {
    #[error("Rating ID cannot be empty")]
    EmptyId,

    #[error("Rating ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Rating ID contains invalid character: '{0}'. Only alphanumeric characters and hyphens are allowed")]
    InvalidIdCharacter(char),

    #[error("Rating value {0} is out of range: must be an integer between 1 and 5")]
    ValueOutOfRange(i16),
}

const MAX_ID_LENGTH: usize = 64;

/// Validate a rating ID
pub fn validate_rating_id(id: &str) -> Result<(), RatingValidationError> {
    if id.is_empty() {
        return Err(RatingValidationError::EmptyId);
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(RatingValidationError::IdTooLong(MAX_ID_LENGTH));
    }

    for c in id.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(RatingValidationError::InvalidIdCharacter(c));
        }
    }

    Ok(())
}

/// Validate a rating value: integer in [1, 5]
pub fn validate_rating_value(value: i16) -> Result<(), RatingValidationError> {
    if !(1..=5).contains(&value) {
        return Err(RatingValidationError::ValueOutOfRange(value));
    }

    Ok(())
}
