//! Application state for shared services

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::job::{Job, JobPage, JobQuery, JobRepository, JobStats};
use crate::domain::user::{User, UserRepository};
use crate::infrastructure::auth::{JwtConfig, TokenIssuer, TokenService};
use crate::infrastructure::job::{CreateJobRequest, InMemoryJobRepository, JobService};
use crate::infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PasswordHasher, RegisterRequest, UpdateProfileRequest,
    UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub job_service: Arc<dyn JobServiceTrait>,
    pub token_service: Arc<dyn TokenIssuer>,
}

impl AppState {
    /// State wired against in-memory repositories, for tests and local
    /// development without a database
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self {
            user_service: Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(Argon2Hasher::new()),
            )),
            job_service: Arc::new(JobService::new(Arc::new(InMemoryJobRepository::new()))),
            token_service: Arc::new(TokenService::new(jwt)),
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError>;
    async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError>;
}

/// Trait for job service operations
#[async_trait::async_trait]
pub trait JobServiceTrait: Send + Sync {
    async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError>;
    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Job, DomainError>;
    async fn create(&self, owner: Uuid, request: CreateJobRequest) -> Result<Job, DomainError>;
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Job, DomainError>;
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), DomainError>;
    async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError>;
}

// Implement the traits for the concrete services

#[async_trait::async_trait]
impl<R: UserRepository, H: PasswordHasher> UserServiceTrait for UserService<R, H> {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        UserService::update_profile(self, user_id, request).await
    }
}

#[async_trait::async_trait]
impl<R: JobRepository> JobServiceTrait for JobService<R> {
    async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError> {
        JobService::list(self, owner, query).await
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Job, DomainError> {
        JobService::get(self, owner, id).await
    }

    async fn create(&self, owner: Uuid, request: CreateJobRequest) -> Result<Job, DomainError> {
        JobService::create(self, owner, request).await
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Job, DomainError> {
        JobService::update(self, owner, id, company, position).await
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), DomainError> {
        JobService::delete(self, owner, id).await
    }

    async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError> {
        JobService::stats(self, owner).await
    }
}
