//! User service: registration, login, profile updates

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{
    User, UserRepository, validate_email, validate_name, validate_password,
    validate_profile_field,
};

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub lastname: Option<String>,
    pub location: Option<String>,
}

/// Request for updating a user's profile
#[derive(Debug, Clone)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub lastname: String,
    pub location: String,
}

/// User service wrapping a repository and a password hasher
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user. The plaintext password is hashed before it ever
    /// reaches the repository.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(lastname) = &request.lastname {
            validate_profile_field("lastname", lastname)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }
        if let Some(location) = &request.location {
            validate_profile_field("location", location)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = User::new(
            &request.name,
            &request.email,
            password_hash,
            request.lastname,
            request.location,
        );

        self.repository.create(user).await
    }

    /// Authenticate with email and password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::credential("Invalid Credentials"))?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(DomainError::credential(
                "Password doesn't match with the provided email",
            ));
        }

        Ok(user)
    }

    /// Update name, email, and profile fields of an existing user
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_profile_field("lastname", &request.lastname)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_profile_field("location", &request.location)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut user = self
            .repository
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No user with id : {}", user_id)))?;

        user.update_profile(
            request.name,
            request.email,
            request.lastname,
            request.location,
        );

        self.repository.update(&user).await
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::in_memory::InMemoryUserRepository;
    use crate::infrastructure::user::password::Argon2Hasher;

    fn service() -> UserService<InMemoryUserRepository, Argon2Hasher> {
        UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        )
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "ada".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            lastname: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = service();

        let user = service.register(register_request("ada@example.com")).await.unwrap();

        assert_ne!(user.password_hash(), "secret1");
        assert_eq!(user.lastname(), "lastname");
        assert_eq!(user.location(), "my city");
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let service = service();
        service.register(register_request("ada@example.com")).await.unwrap();

        let user = service
            .authenticate("ada@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(user.email(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let service = service();

        let err = service
            .authenticate("nobody@example.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Credential { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service();
        service.register(register_request("ada@example.com")).await.unwrap();

        let err = service
            .authenticate("ada@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Credential { .. }));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let service = service();

        let mut bad_email = register_request("not-an-email");
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            service.register(bad_email).await.unwrap_err(),
            DomainError::Validation { .. }
        ));

        let mut short_password = register_request("ada@example.com");
        short_password.password = "12345".to_string();
        assert!(matches!(
            service.register(short_password).await.unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email_names_field() {
        let service = service();
        service.register(register_request("ada@example.com")).await.unwrap();

        let err = service
            .register(register_request("ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Duplicate { field } if field == "email"));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let service = service();
        let user = service.register(register_request("ada@example.com")).await.unwrap();

        let updated = service
            .update_profile(
                user.id(),
                UpdateProfileRequest {
                    name: "Ada".to_string(),
                    email: "ada@lovelace.dev".to_string(),
                    lastname: "Lovelace".to_string(),
                    location: "London".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email(), "ada@lovelace.dev");
        assert_eq!(updated.lastname(), "Lovelace");

        // The password hash survives a profile update.
        let authed = service
            .authenticate("ada@lovelace.dev", "secret1")
            .await
            .unwrap();
        assert_eq!(authed.id(), user.id());
    }

    #[tokio::test]
    async fn test_update_profile_unknown_user() {
        let service = service();

        let err = service
            .update_profile(
                Uuid::new_v4(),
                UpdateProfileRequest {
                    name: "ghost".to_string(),
                    email: "ghost@example.com".to_string(),
                    lastname: "lastname".to_string(),
                    location: "my city".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
