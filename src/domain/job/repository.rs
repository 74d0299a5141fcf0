//! Job repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Job;
use super::query::{JobPage, JobQuery};
use super::stats::JobStats;
use crate::domain::DomainError;

/// Repository trait for job storage
///
/// Every operation except `create` takes the owning user id, and
/// implementations must scope by `{id, owner}` in a single atomic
/// match-and-mutate so one user can never observe or touch another user's
/// records, regardless of guessed ids.
#[async_trait]
pub trait JobRepository: Send + Sync + Debug {
    /// Persist a new job
    async fn create(&self, job: Job) -> Result<Job, DomainError>;

    /// Get one owned job
    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// Filtered, sorted, paginated listing of owned jobs
    async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError>;

    /// Atomically update company/position of an owned job; `None` when no
    /// record matches `{id, owner}`
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Option<Job>, DomainError>;

    /// Atomically delete an owned job; `false` when no record matches
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, DomainError>;

    /// Grouped aggregate statistics over the owner's jobs
    async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError>;
}
