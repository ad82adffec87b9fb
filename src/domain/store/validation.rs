//! Store validation utilities

use thiserror::Error;

/// Errors that can occur during store validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreValidationError {
    #[error("Store ID cannot be empty")]
    EmptyId,

    #[error("Store ID exceeds maximum length of {0} characters")]
    IdTooLong(usize),

    #[error("Store ID contains invalid character: '{0}'. Only alphanumeric characters and hyphens are allowed")]
    InvalidIdCharacter(char),

    #[error("Store name cannot be empty")]
    EmptyName,

    #[error("Store name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Store address cannot be empty")]
    EmptyAddress,

    #[error("Store address exceeds maximum length of {0} characters")]
    AddressTooLong(usize),
}

const MAX_ID_LENGTH: usize = 64;
const MAX_NAME_LENGTH: usize = 60;
const MAX_ADDRESS_LENGTH: usize = 400;

/// Validate a store ID
pub fn validate_store_id(id: &str) -> Result<(), StoreValidationError> {
    if id.is_empty() {
        return Err(StoreValidationError::EmptyId);
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(StoreValidationError::IdTooLong(MAX_ID_LENGTH));
    }

    for c in id.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(StoreValidationError::InvalidIdCharacter(c));
        }
    }

    Ok(())
}

/// Validate a store name: required, at most 60 characters
pub fn validate_store_name(name: &str) -> Result<(), StoreValidationError> {
    if name.trim().is_empty() {
        return Err(StoreValidationError::EmptyName);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(StoreValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a store address: required, at most 400 characters
pub fn validate_store_address(address: &str) -> Result<(), StoreValidationError> {
    if address.trim().is_empty() {
        return Err(StoreValidationError::EmptyAddress);
    }

    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(StoreValidationError::AddressTooLong(MAX_ADDRESS_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_store_ids() {
        assert!(validate_store_id("store-1").is_ok());
        assert!(validate_store_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[test]
    fn test_invalid_store_ids() {
        assert_eq!(validate_store_id(""), Err(StoreValidationError::EmptyId));
        assert_eq!(
            validate_store_id(&"a".repeat(65)),
            Err(StoreValidationError::IdTooLong(64))
        );
        assert_eq!(
            validate_store_id("store 1"),
            Err(StoreValidationError::InvalidIdCharacter(' '))
        );
    }

    #[test]
    fn test_valid_store_names() {
        assert!(validate_store_name("Corner Bakery").is_ok());
        assert!(validate_store_name(&"a".repeat(60)).is_ok());
    }

    #[test]
    fn test_invalid_store_names() {
        assert_eq!(validate_store_name(""), Err(StoreValidationError::EmptyName));
        assert_eq!(
            validate_store_name("  "),
            Err(StoreValidationError::EmptyName)
        );
        assert_eq!(
            validate_store_name(&"a".repeat(61)),
            Err(StoreValidationError::NameTooLong(60))
        );
    }

    #[test]
    fn test_valid_store_addresses() {
        assert!(validate_store_address("1 Main St").is_ok());
        assert!(validate_store_address(&"a".repeat(400)).is_ok());
    }

    #[test]
    fn test_invalid_store_addresses() {
        assert_eq!(
            validate_store_address(""),
            Err(StoreValidationError::EmptyAddress)
        );
        assert_eq!(
            validate_store_address(&"a".repeat(401)),
            Err(StoreValidationError::AddressTooLong(400))
        );
    }
}
