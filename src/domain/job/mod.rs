//! Job domain
//!
//! Entity, listing query model, aggregate statistics, validation rules, and
//! the repository trait for job-application records.

mod entity;
mod query;
mod repository;
mod stats;
mod validation;

pub use entity::{DEFAULT_JOB_LOCATION, Job, JobStatus, JobType};
pub use query::{DEFAULT_PAGE_LIMIT, Filter, JobPage, JobQuery, JobSort};
pub use repository::JobRepository;
pub use stats::{
    JobStats, MONTHLY_STATS_MONTHS, MonthlyCount, StatusCounts, monthly_series, year_month,
};
pub use validation::{JobValidationError, validate_company, validate_position};
