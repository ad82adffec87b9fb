//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::auth::Role;
use crate::domain::DomainError;

/// Filter for user listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Restrict to a single role
    pub role: Option<Role>,
    /// Case-insensitive substring over name and email
    pub search: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role() != role {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            return user.name().to_lowercase().contains(&needle)
                || user.email().to_lowercase().contains(&needle);
        }

        true
    }
}

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by their email address
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user; fails with Conflict when the email is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// List users matching the filter, ordered by creation time
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<u64, DomainError>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(id.as_str()).cloned())
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users
                .values()
                .find(|u| u.email().eq_ignore_ascii_case(email))
                .cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            let id = user.id().as_str().to_string();

            if users.contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "User with ID '{}' already exists",
                    id
                )));
            }

            if users
                .values()
                .any(|u| u.email().eq_ignore_ascii_case(user.email()))
            {
                return Err(DomainError::conflict(format!(
                    "Email '{}' is already registered",
                    user.email()
                )));
            }

            users.insert(id, user.clone());
            Ok(user)
        }

        async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;

            let mut result: Vec<User> = users
                .values()
                .filter(|u| filter.matches(u))
                .cloned()
                .collect();
            result.sort_by_key(|u| u.created_at());

            Ok(result)
        }

        async fn count(&self) -> Result<u64, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.len() as u64)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn create_test_user(name: &str, email: &str, role: Role) -> User {
            User::new(UserId::generate(), name, email, "credential", role).unwrap()
        }

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockUserRepository::new();
            let user = create_test_user("Ada", "ada@example.com", Role::User);

            repo.create(user.clone()).await.unwrap();

            let retrieved = repo.get(user.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().email(), "ada@example.com");
        }

        #[tokio::test]
        async fn test_get_by_email() {
            let repo = MockUserRepository::new();
            let user = create_test_user("Ada", "ada@example.com", Role::User);

            repo.create(user.clone()).await.unwrap();

            let retrieved = repo.get_by_email("ADA@example.com").await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().id(), user.id());
        }

        #[tokio::test]
        async fn test_email_uniqueness() {
            let repo = MockUserRepository::new();

            repo.create(create_test_user("Ada", "ada@example.com", Role::User))
                .await
                .unwrap();

            let result = repo
                .create(create_test_user("Other", "ada@example.com", Role::Owner))
                .await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));
        }

        #[tokio::test]
        async fn test_list_with_filter() {
            let repo = MockUserRepository::new();

            repo.create(create_test_user("Ada", "ada@example.com", Role::User))
                .await
                .unwrap();
            repo.create(create_test_user("Grace", "grace@example.com", Role::Owner))
                .await
                .unwrap();

            let all = repo.list(&UserFilter::default()).await.unwrap();
            assert_eq!(all.len(), 2);

            let owners = repo
                .list(&UserFilter {
                    role: Some(Role::Owner),
                    search: None,
                })
                .await
                .unwrap();
            assert_eq!(owners.len(), 1);
            assert_eq!(owners[0].name(), "Grace");

            let searched = repo
                .list(&UserFilter {
                    role: None,
                    search: Some("ada".to_string()),
                })
                .await
                .unwrap();
            assert_eq!(searched.len(), 1);
        }

        #[tokio::test]
        async fn test_count() {
            let repo = MockUserRepository::new();

            repo.create(create_test_user("Ada", "ada@example.com", Role::User))
                .await
                .unwrap();
            repo.create(create_test_user("Grace", "grace@example.com", Role::Owner))
                .await
                .unwrap();

            assert_eq!(repo.count().await.unwrap(), 2);
        }

        #[tokio::test]
        async fn test_should_fail() {
            let repo = MockUserRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.count().await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));
        }
    }
}
