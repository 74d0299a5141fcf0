//! Job service: validation plus ownership-scoped store access

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::job::{
    Job, JobPage, JobQuery, JobRepository, JobStats, JobStatus, JobType, validate_company,
    validate_position,
};

/// Request for creating a new job
#[derive(Debug, Clone)]
pub struct CreateJobRequest {
    pub company: String,
    pub position: String,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub job_location: Option<String>,
}

/// Job service wrapping a repository
#[derive(Debug)]
pub struct JobService<R: JobRepository> {
    repository: Arc<R>,
}

impl<R: JobRepository> JobService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Filtered, sorted, paginated listing of the owner's jobs
    pub async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError> {
        self.repository.list(owner, query).await
    }

    /// Get one owned job
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Job, DomainError> {
        self.repository
            .get(owner, id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No job with id : {}", id)))
    }

    /// Create a job for the owner, with schema validation on required fields
    pub async fn create(
        &self,
        owner: Uuid,
        request: CreateJobRequest,
    ) -> Result<Job, DomainError> {
        validate_company(&request.company).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_position(&request.position)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let job = Job::new(
            owner,
            request.company,
            request.position,
            request.status,
            request.job_type,
            request.job_location,
        );

        self.repository.create(job).await
    }

    /// Update company/position of an owned job
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Job, DomainError> {
        if company.is_empty() || position.is_empty() {
            return Err(DomainError::validation(
                "company and position fields cannot be empty",
            ));
        }

        validate_company(company).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_position(position).map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository
            .update(owner, id, company, position)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No job with id : {}", id)))
    }

    /// Delete an owned job
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), DomainError> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found(format!("No job with id : {}", id)))
        }
    }

    /// Aggregate statistics for the owner
    pub async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError> {
        self.repository.stats(owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::job::in_memory::InMemoryJobRepository;

    fn service() -> JobService<InMemoryJobRepository> {
        JobService::new(Arc::new(InMemoryJobRepository::new()))
    }

    fn create_request(company: &str, position: &str) -> CreateJobRequest {
        CreateJobRequest {
            company: company.to_string(),
            position: position.to_string(),
            status: None,
            job_type: None,
            job_location: None,
        }
    }

    #[tokio::test]
    async fn test_create_requires_company() {
        let service = service();

        let err = service
            .create(Uuid::new_v4(), create_request("", "Engineer"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let service = service();

        let job = service
            .create(Uuid::new_v4(), create_request("Acme", "Engineer"))
            .await
            .unwrap();

        assert_eq!(job.status(), JobStatus::Pending);
        assert_eq!(job.job_type(), JobType::FullTime);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_fields() {
        let service = service();
        let owner = Uuid::new_v4();
        let job = service
            .create(owner, create_request("Acme", "Engineer"))
            .await
            .unwrap();

        let err = service
            .update(owner, job.id(), "", "Engineer")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service
            .update(owner, job.id(), "Acme", "")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_job_is_not_found() {
        let service = service();

        let err = service
            .update(Uuid::new_v4(), Uuid::new_v4(), "Acme", "Engineer")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_job_is_not_found() {
        let service = service();

        let err = service
            .delete(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_cross_user_get_is_not_found() {
        let service = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let job = service
            .create(owner, create_request("Acme", "Engineer"))
            .await
            .unwrap();

        assert!(service.get(owner, job.id()).await.is_ok());
        let err = service.get(stranger, job.id()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
