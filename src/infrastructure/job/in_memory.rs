//! In-memory job repository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::job::{
    Job, JobPage, JobQuery, JobRepository, JobSort, JobStats, JobStatus, StatusCounts,
    monthly_series, year_month,
};

/// In-memory implementation of `JobRepository`
///
/// Filtering, sorting, pagination, and aggregation mirror the SQL
/// implementation's semantics, including ownership scoping on every
/// operation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        self.jobs.write().await.insert(job.id(), job.clone());
        Ok(job)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<Job>, DomainError> {
        Ok(self
            .jobs
            .read()
            .await
            .get(&id)
            .filter(|job| job.created_by() == owner)
            .cloned())
    }

    async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError> {
        let jobs = self.jobs.read().await;

        let mut matched: Vec<Job> = jobs
            .values()
            .filter(|job| job.created_by() == owner && query.matches(job))
            .cloned()
            .collect();

        match query.sort {
            JobSort::Latest => matched.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            JobSort::Oldest => matched.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
            JobSort::PositionAsc => matched.sort_by(|a, b| a.position().cmp(b.position())),
            JobSort::PositionDesc => matched.sort_by(|a, b| b.position().cmp(a.position())),
        }

        let total = matched.len() as u64;
        let page: Vec<Job> = matched
            .into_iter()
            .skip(query.skip() as usize)
            .take(query.limit as usize)
            .collect();

        Ok(JobPage::new(page, total, query.limit))
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Option<Job>, DomainError> {
        let mut jobs = self.jobs.write().await;

        // Single guarded mutation under the write lock, matching the SQL
        // implementation's atomic {id, owner} match-and-mutate.
        match jobs.get_mut(&id).filter(|job| job.created_by() == owner) {
            Some(job) => {
                job.set_company_and_position(company, position);
                Ok(Some(job.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;

        let owned = jobs
            .get(&id)
            .map(|job| job.created_by() == owner)
            .unwrap_or(false);

        if owned {
            jobs.remove(&id);
        }

        Ok(owned)
    }

    async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError> {
        let jobs = self.jobs.read().await;

        let mut counts = StatusCounts::default();
        let mut by_month: HashMap<(i32, u32), u64> = HashMap::new();

        for job in jobs.values().filter(|job| job.created_by() == owner) {
            match job.status() {
                JobStatus::Pending => counts.pending += 1,
                JobStatus::Interview => counts.interview += 1,
                JobStatus::Denied => counts.denied += 1,
            }

            *by_month.entry(year_month(job.created_at())).or_insert(0) += 1;
        }

        let groups = by_month
            .into_iter()
            .map(|((year, month), count)| (year, month, count))
            .collect();

        Ok(JobStats {
            status_counts: counts,
            monthly_applications: monthly_series(groups),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{Filter, JobType};

    fn job(owner: Uuid, position: &str, status: JobStatus) -> Job {
        Job::new(owner, "Acme", position, Some(status), None, None)
    }

    #[tokio::test]
    async fn test_ownership_scoping_on_get() {
        let repo = InMemoryJobRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let created = repo
            .create(job(bob, "Engineer", JobStatus::Pending))
            .await
            .unwrap();

        assert!(repo.get(bob, created.id()).await.unwrap().is_some());
        assert!(repo.get(alice, created.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ownership_scoping_on_update_and_delete() {
        let repo = InMemoryJobRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let created = repo
            .create(job(bob, "Engineer", JobStatus::Pending))
            .await
            .unwrap();

        let stolen = repo
            .update(alice, created.id(), "Evil Corp", "Mole")
            .await
            .unwrap();
        assert!(stolen.is_none());

        assert!(!repo.delete(alice, created.id()).await.unwrap());
        assert!(repo.delete(bob, created.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();

        for i in 0..15 {
            repo.create(job(owner, &format!("Engineer {i:02}"), JobStatus::Pending))
                .await
                .unwrap();
        }
        repo.create(job(owner, "Designer", JobStatus::Interview))
            .await
            .unwrap();

        let query = JobQuery {
            search: Some("engineer".to_string()),
            ..JobQuery::new()
        };
        let page = repo.list(owner, &query).await.unwrap();

        assert_eq!(page.total_jobs, 15);
        assert_eq!(page.no_of_pages, 2);
        assert_eq!(page.jobs.len(), 10);

        let page2 = repo
            .list(
                owner,
                &JobQuery {
                    search: Some("engineer".to_string()),
                    page: 2,
                    ..JobQuery::new()
                },
            )
            .await
            .unwrap();
        assert_eq!(page2.jobs.len(), 5);
    }

    #[tokio::test]
    async fn test_list_status_all_vs_specific() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();

        repo.create(job(owner, "A", JobStatus::Pending)).await.unwrap();
        repo.create(job(owner, "B", JobStatus::Pending)).await.unwrap();
        repo.create(job(owner, "C", JobStatus::Interview)).await.unwrap();

        let all = repo.list(owner, &JobQuery::new()).await.unwrap();
        assert_eq!(all.total_jobs, 3);

        let pending = repo
            .list(
                owner,
                &JobQuery {
                    status: Filter::Only(JobStatus::Pending),
                    ..JobQuery::new()
                },
            )
            .await
            .unwrap();
        assert_eq!(pending.total_jobs, 2);
        assert!(pending
            .jobs
            .iter()
            .all(|j| j.status() == JobStatus::Pending));
    }

    #[tokio::test]
    async fn test_list_sort_by_position() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();

        repo.create(job(owner, "Zoologist", JobStatus::Pending))
            .await
            .unwrap();
        repo.create(job(owner, "Analyst", JobStatus::Pending))
            .await
            .unwrap();

        let asc = repo
            .list(
                owner,
                &JobQuery {
                    sort: JobSort::PositionAsc,
                    ..JobQuery::new()
                },
            )
            .await
            .unwrap();
        assert_eq!(asc.jobs[0].position(), "Analyst");

        let desc = repo
            .list(
                owner,
                &JobQuery {
                    sort: JobSort::PositionDesc,
                    ..JobQuery::new()
                },
            )
            .await
            .unwrap();
        assert_eq!(desc.jobs[0].position(), "Zoologist");
    }

    #[tokio::test]
    async fn test_job_type_filter() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();

        repo.create(Job::new(
            owner,
            "Acme",
            "Engineer",
            None,
            Some(JobType::Remote),
            None,
        ))
        .await
        .unwrap();
        repo.create(Job::new(owner, "Acme", "Intern", None, Some(JobType::Intern), None))
            .await
            .unwrap();

        let remote = repo
            .list(
                owner,
                &JobQuery {
                    job_type: Filter::Only(JobType::Remote),
                    ..JobQuery::new()
                },
            )
            .await
            .unwrap();
        assert_eq!(remote.total_jobs, 1);
        assert_eq!(remote.jobs[0].job_type(), JobType::Remote);
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let repo = InMemoryJobRepository::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        repo.create(job(owner, "A", JobStatus::Pending)).await.unwrap();
        repo.create(job(owner, "B", JobStatus::Pending)).await.unwrap();
        repo.create(job(owner, "C", JobStatus::Interview)).await.unwrap();
        repo.create(job(other, "D", JobStatus::Denied)).await.unwrap();

        let stats = repo.stats(owner).await.unwrap();

        assert_eq!(stats.status_counts.pending, 2);
        assert_eq!(stats.status_counts.interview, 1);
        assert_eq!(stats.status_counts.denied, 0);
        assert_eq!(stats.monthly_applications.len(), 1);
        assert_eq!(stats.monthly_applications[0].count, 3);
    }
}
