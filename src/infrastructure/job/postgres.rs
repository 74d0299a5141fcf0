//! PostgreSQL job repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row, postgres::PgRow};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::job::{
    Filter, Job, JobPage, JobQuery, JobRepository, JobSort, JobStats, JobStatus, JobType,
    MONTHLY_STATS_MONTHS, StatusCounts, monthly_series,
};

/// PostgreSQL implementation of `JobRepository`
///
/// Update and delete are single conditional statements matching on
/// `{id, created_by}`, so ownership scoping is atomic at the store and no
/// read-then-write race exists.
#[derive(Debug, Clone)]
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const JOB_COLUMNS: &str =
    "id, company, position, status, job_type, job_location, created_by, created_at, updated_at";

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, company, position, status, job_type, job_location,
                              created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(job.id())
        .bind(job.company())
        .bind(job.position())
        .bind(job.status().as_str())
        .bind(job.job_type().as_str())
        .bind(job.job_location())
        .bind(job.created_by())
        .bind(job.created_at())
        .bind(job.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create job: {}", e)))?;

        Ok(job)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<Job>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND created_by = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get job: {}", e)))?;

        row.map(|r| row_to_job(&r)).transpose()
    }

    async fn list(&self, owner: Uuid, query: &JobQuery) -> Result<JobPage, DomainError> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM jobs");
        push_filters(&mut count_builder, owner, query);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count jobs: {}", e)))?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {JOB_COLUMNS} FROM jobs"));
        push_filters(&mut builder, owner, query);

        builder.push(match query.sort {
            JobSort::Latest => " ORDER BY created_at DESC",
            JobSort::Oldest => " ORDER BY created_at ASC",
            JobSort::PositionAsc => " ORDER BY position ASC",
            JobSort::PositionDesc => " ORDER BY position DESC",
        });

        builder.push(" LIMIT ");
        builder.push_bind(i64::from(query.limit));
        builder.push(" OFFSET ");
        builder.push_bind(query.skip() as i64);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list jobs: {}", e)))?;

        let mut jobs = Vec::with_capacity(rows.len());
        for row in &rows {
            jobs.push(row_to_job(row)?);
        }

        Ok(JobPage::new(jobs, total as u64, query.limit))
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        company: &str,
        position: &str,
    ) -> Result<Option<Job>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE jobs
            SET company = $3, position = $4, updated_at = NOW()
            WHERE id = $1 AND created_by = $2
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner)
        .bind(company)
        .bind(position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update job: {}", e)))?;

        row.map(|r| row_to_job(&r)).transpose()
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete job: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn stats(&self, owner: Uuid) -> Result<JobStats, DomainError> {
        let status_rows = sqlx::query(
            "SELECT status, COUNT(*) AS count FROM jobs WHERE created_by = $1 GROUP BY status",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to aggregate statuses: {}", e)))?;

        let mut counts = StatusCounts::default();
        for row in &status_rows {
            let status: String = row.get("status");
            let count: i64 = row.get("count");

            match JobStatus::parse(&status) {
                Some(JobStatus::Pending) => counts.pending = count as u64,
                Some(JobStatus::Interview) => counts.interview = count as u64,
                Some(JobStatus::Denied) => counts.denied = count as u64,
                None => {}
            }
        }

        let monthly_rows = sqlx::query(
            r#"
            SELECT EXTRACT(YEAR FROM created_at)::INT AS year,
                   EXTRACT(MONTH FROM created_at)::INT AS month,
                   COUNT(*) AS count
            FROM jobs
            WHERE created_by = $1
            GROUP BY year, month
            ORDER BY year DESC, month DESC
            LIMIT $2
            "#,
        )
        .bind(owner)
        .bind(MONTHLY_STATS_MONTHS as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to aggregate months: {}", e)))?;

        let groups = monthly_rows
            .iter()
            .map(|row| {
                let year: i32 = row.get("year");
                let month: i32 = row.get("month");
                let count: i64 = row.get("count");
                (year, month as u32, count as u64)
            })
            .collect();

        Ok(JobStats {
            status_counts: counts,
            monthly_applications: monthly_series(groups),
        })
    }
}

/// Append the ownership and optional filter conditions shared by the listing
/// and count queries
fn push_filters(builder: &mut QueryBuilder<Postgres>, owner: Uuid, query: &JobQuery) {
    builder.push(" WHERE created_by = ");
    builder.push_bind(owner);

    if let Some(search) = &query.search {
        builder.push(" AND position ILIKE ");
        builder.push_bind(format!("%{}%", escape_like(search)));
    }

    if let Filter::Only(status) = query.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }

    if let Filter::Only(job_type) = query.job_type {
        builder.push(" AND job_type = ");
        builder.push_bind(job_type.as_str());
    }
}

/// Escape LIKE wildcards so a search term is treated as a literal substring
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn row_to_job(row: &PgRow) -> Result<Job, DomainError> {
    let status: String = row.get("status");
    let job_type: String = row.get("job_type");

    Ok(Job::from_storage(
        row.get("id"),
        row.get("company"),
        row.get("position"),
        JobStatus::parse(&status).unwrap_or_default(),
        JobType::parse(&job_type).unwrap_or_default(),
        row.get("job_location"),
        row.get("created_by"),
        row.get("created_at"),
        row.get("updated_at"),
    ))
}
