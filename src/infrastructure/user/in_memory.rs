//! In-memory user repository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository};

/// In-memory implementation of `UserRepository`
///
/// Enforces the same email-uniqueness invariant as the PostgreSQL
/// implementation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::duplicate("email"));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email() == user.email() && u.id() != user.id())
        {
            return Err(DomainError::duplicate("email"));
        }

        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!(
                "No user with id : {}",
                user.id()
            )));
        }

        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User::new(name, email, "hash", None, None)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("ada", "ada@example.com")).await.unwrap();

        let fetched = repo.get(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.email(), "ada@example.com");

        let by_email = repo.get_by_email("ada@example.com").await.unwrap();
        assert!(by_email.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("ada", "ada@example.com")).await.unwrap();

        let err = repo
            .create(user("eve", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate { field } if field == "email"));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let ghost = user("ghost", "ghost@example.com");

        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_cannot_steal_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("ada", "ada@example.com")).await.unwrap();
        let mut eve = repo.create(user("eve", "eve@example.com")).await.unwrap();

        eve.update_profile("eve", "ada@example.com", "lastname", "my city");
        let err = repo.update(&eve).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate { .. }));
    }
}
