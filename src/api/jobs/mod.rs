//! Job tracking API endpoints
//!
//! Every route is scoped to the authenticated user. Reads require a valid
//! token; writes additionally require a non-demo account.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::middleware::{RequireUser, RequireWriteAccess};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::job::{
    Filter, Job, JobQuery, JobSort, JobStatus, JobType, MonthlyCount, StatusCounts,
};
use crate::infrastructure::job::CreateJobRequest;

/// Create the jobs router
pub fn create_jobs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/stats", get(show_stats))
        .route(
            "/{id}",
            get(get_job).patch(update_job).delete(delete_job),
        )
}

/// Query string accepted by the listing endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListJobsParams {
    /// Convert the raw query string into a domain query
    ///
    /// The literal `"all"` disables the status and type filters; any other
    /// unrecognized value is rejected rather than silently matching nothing.
    fn into_query(self) -> Result<JobQuery, ApiError> {
        let status = match self.status.as_deref() {
            None | Some("all") => Filter::All,
            Some(raw) => JobStatus::parse(raw)
                .map(Filter::Only)
                .ok_or_else(|| ApiError::bad_request(format!("Invalid status value: {raw}")))?,
        };

        let job_type = match self.job_type.as_deref() {
            None | Some("all") => Filter::All,
            Some(raw) => JobType::parse(raw)
                .map(Filter::Only)
                .ok_or_else(|| ApiError::bad_request(format!("Invalid job type value: {raw}")))?,
        };

        let defaults = JobQuery::new();

        Ok(JobQuery {
            search: self.search.filter(|s| !s.is_empty()),
            status,
            job_type,
            sort: self
                .sort
                .as_deref()
                .map(JobSort::parse)
                .unwrap_or_default(),
            page: self.page.unwrap_or(defaults.page).max(1),
            limit: self.limit.unwrap_or(defaults.limit).max(1),
        })
    }
}

/// Job creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobBody {
    pub company: String,
    pub position: String,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub job_location: Option<String>,
}

/// Job update request body
///
/// Fields are optional so a missing field reports the same validation error
/// as an explicitly empty one.
#[derive(Debug, Deserialize)]
pub struct UpdateJobBody {
    pub company: Option<String>,
    pub position: Option<String>,
}

/// One page of jobs plus pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    pub no_of_pages: u64,
}

/// Envelope for a single job
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: Job,
}

/// Aggregate stats response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub default_stats: StatusCounts,
    pub monthly_applications: Vec<MonthlyCount>,
}

fn parse_job_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("No job with id : {raw}")))
}

fn parse_status(raw: Option<&str>) -> Result<Option<JobStatus>, ApiError> {
    match raw {
        None => Ok(None),
        Some(raw) => JobStatus::parse(raw)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid status value: {raw}"))),
    }
}

fn parse_job_type(raw: Option<&str>) -> Result<Option<JobType>, ApiError> {
    match raw {
        None => Ok(None),
        Some(raw) => JobType::parse(raw)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid job type value: {raw}"))),
    }
}

/// List the authenticated user's jobs
///
/// GET /api/v1/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    RequireUser(identity): RequireUser,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<ListJobsResponse>, ApiError> {
    let query = params.into_query()?;
    let page = state.job_service.list(identity.user_id, &query).await?;

    Ok(Json(ListJobsResponse {
        jobs: page.jobs,
        total_jobs: page.total_jobs,
        no_of_pages: page.no_of_pages,
    }))
}

/// Fetch a single job owned by the authenticated user
///
/// GET /api/v1/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    RequireUser(identity): RequireUser,
    Path(id): Path<String>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_job_id(&id)?;
    let job = state.job_service.get(identity.user_id, id).await?;

    Ok(Json(JobResponse { job }))
}

/// Create a job owned by the authenticated user
///
/// POST /api/v1/jobs
pub async fn create_job(
    State(state): State<AppState>,
    RequireWriteAccess(identity): RequireWriteAccess,
    Json(body): Json<CreateJobBody>,
) -> Result<(StatusCode, Json<JobResponse>), ApiError> {
    let status = parse_status(body.status.as_deref())?;
    let job_type = parse_job_type(body.job_type.as_deref())?;

    let job = state
        .job_service
        .create(
            identity.user_id,
            CreateJobRequest {
                company: body.company,
                position: body.position,
                status,
                job_type,
                job_location: body.job_location,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// Update the company and position of an owned job
///
/// PATCH /api/v1/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    RequireWriteAccess(identity): RequireWriteAccess,
    Path(id): Path<String>,
    Json(body): Json<UpdateJobBody>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_job_id(&id)?;

    let job = state
        .job_service
        .update(
            identity.user_id,
            id,
            body.company.as_deref().unwrap_or_default(),
            body.position.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(JobResponse { job }))
}

/// Delete an owned job
///
/// DELETE /api/v1/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    RequireWriteAccess(identity): RequireWriteAccess,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_job_id(&id)?;
    state.job_service.delete(identity.user_id, id).await?;

    Ok(StatusCode::OK)
}

/// Aggregate stats over the authenticated user's jobs
///
/// GET /api/v1/jobs/stats
pub async fn show_stats(
    State(state): State<AppState>,
    RequireUser(identity): RequireUser,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.job_service.stats(identity.user_id).await?;

    Ok(Json(StatsResponse {
        default_stats: stats.status_counts,
        monthly_applications: stats.monthly_applications,
    }))
}
