//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_credential, validate_email, validate_user_id, validate_user_name,
    UserValidationError,
};
use crate::domain::auth::Role;

/// User identifier - opaque token, minted as a UUID v4 string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
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

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// The role is assigned at creation and never changes afterwards; there is
/// deliberately no mutator for it. The credential is an opaque blob supplied
/// by the caller's authentication layer and is never serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: UserId,
    /// Display name
    name: String,
    /// Email address, unique across users
    email: String,
    /// Opaque credential - never exposed in serialization
    #[serde(skip_serializing)]
    #[serde(default)]
    credential: String,
    /// Role deciding what this account may do
    role: Role,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user after validating name, email and credential
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<String>,
        role: Role,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();
        let credential = credential.into();

        validate_user_name(&name)?;
        validate_email(&email)?;
        validate_credential(&credential)?;

        let now = Utc::now();

        Ok(Self {
            id,
            name,
            email,
            credential,
            role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a user from stored fields
    pub(crate) fn restore(
        id: UserId,
        name: String,
        email: String,
        credential: String,
        role: Role,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            credential,
            role,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), UserValidationError> {
        let name = name.into();
        validate_user_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the email address
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), UserValidationError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(name: &str, email: &str, role: Role) -> User {
        User::new(UserId::generate(), name, email, "opaque-credential", role).unwrap()
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user-1").unwrap();
        assert_eq!(id.as_str(), "user-1");
    }

    #[test]
    fn test_user_id_generate() {
        let id = UserId::generate();
        assert!(!id.as_str().is_empty());
        assert_ne!(id, UserId::generate());
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("user id").is_err());
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user("Ada Lovelace", "ada@example.com", Role::User);

        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.credential(), "opaque-credential");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_user_creation_rejects_bad_email() {
        let result = User::new(
            UserId::generate(),
            "Ada Lovelace",
            "not-an-email",
            "opaque",
            Role::User,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_user_set_name() {
        let mut user = create_test_user("Ada Lovelace", "ada@example.com", Role::User);
        let original_updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.set_name("Ada King").unwrap();
        assert_eq!(user.name(), "Ada King");
        assert!(user.updated_at() > original_updated);

        assert!(user.set_name("").is_err());
    }

    #[test]
    fn test_user_set_email() {
        let mut user = create_test_user("Ada Lovelace", "ada@example.com", Role::User);

        user.set_email("ada.king@example.com").unwrap();
        assert_eq!(user.email(), "ada.king@example.com");

        assert!(user.set_email("nope").is_err());
    }

    #[test]
    fn test_user_serialization_excludes_credential() {
        let user = create_test_user("Ada Lovelace", "ada@example.com", Role::Owner);

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("opaque-credential"));
        assert!(!json.contains("credential"));
        assert!(json.contains("\"role\":\"owner\""));
    }
}
