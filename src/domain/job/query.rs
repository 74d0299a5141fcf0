//! Listing query: filters, sort order, pagination

use super::entity::{Job, JobStatus, JobType};

/// Default page size for listings
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Sort orders accepted by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// Newest first (`createdAt` descending)
    #[default]
    Latest,
    /// Oldest first (`createdAt` ascending)
    Oldest,
    /// Position ascending
    PositionAsc,
    /// Position descending
    PositionDesc,
}

impl JobSort {
    /// Parse the wire value; anything unrecognized falls back to `Latest`
    pub fn parse(s: &str) -> Self {
        match s {
            "oldest" => Self::Oldest,
            "a-z" => Self::PositionAsc,
            "z-a" => Self::PositionDesc,
            _ => Self::Latest,
        }
    }
}

/// A filter that the literal `"all"` sentinel disables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Check whether a value passes the filter
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Query parameters for a job listing
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    /// Case-insensitive substring match on position
    pub search: Option<String>,
    pub status: Filter<JobStatus>,
    pub job_type: Filter<JobType>,
    pub sort: JobSort,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
}

impl JobQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            ..Default::default()
        }
    }

    /// Rows to skip: `(page - 1) * limit`, with page clamped to at least 1
    pub fn skip(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.limit)
    }

    /// Check whether a job passes the search and enum filters
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(search) = &self.search {
            if !job
                .position()
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }

        self.status.matches(&job.status()) && self.job_type.matches(&job.job_type())
    }
}

/// One page of a job listing
#[derive(Debug, Clone)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_jobs: u64,
    pub no_of_pages: u64,
}

impl JobPage {
    /// Build a page, computing `no_of_pages` as `ceil(total / limit)`
    pub fn new(jobs: Vec<Job>, total_jobs: u64, limit: u32) -> Self {
        let limit = u64::from(limit.max(1));
        Self {
            jobs,
            total_jobs,
            no_of_pages: total_jobs.div_ceil(limit),
        }
    }
}
