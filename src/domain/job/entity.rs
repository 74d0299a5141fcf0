//! Job application entity and enumerations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default location applied when creation omits the field
pub const DEFAULT_JOB_LOCATION: &str = "my city";

/// Progress of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Interview,
    Denied,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interview => "interview",
            Self::Denied => "denied",
        }
    }

    /// Parse a status value from a request
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "interview" => Some(Self::Interview),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

/// Kind of position applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JobType {
    #[default]
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "intern")]
    Intern,
    #[serde(rename = "remote")]
    Remote,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Intern => "intern",
            Self::Remote => "remote",
        }
    }

    /// Parse a job type value from a request
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "intern" => Some(Self::Intern),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// A tracked job application, always owned by a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: Uuid,
    company: String,
    position: String,
    status: JobStatus,
    job_type: JobType,
    job_location: String,
    /// Owning user id; every read and mutation is scoped by this
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job with defaults applied for omitted optional fields
    pub fn new(
        created_by: Uuid,
        company: impl Into<String>,
        position: impl Into<String>,
        status: Option<JobStatus>,
        job_type: Option<JobType>,
        job_location: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            company: company.into(),
            position: position.into(),
            status: status.unwrap_or_default(),
            job_type: job_type.unwrap_or_default(),
            job_location: job_location.unwrap_or_else(|| DEFAULT_JOB_LOCATION.to_string()),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a job from stored columns
    #[allow(clippy::too_many_arguments, reason = "storage row has this many columns")]
    pub fn from_storage(
        id: Uuid,
        company: String,
        position: String,
        status: JobStatus,
        job_type: JobType,
        job_location: String,
        created_by: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            company,
            position,
            status,
            job_type,
            job_location,
            created_by,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn job_location(&self) -> &str {
        &self.job_location
    }

    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply an update to the editable fields
    pub fn set_company_and_position(
        &mut self,
        company: impl Into<String>,
        position: impl Into<String>,
    ) {
        self.company = company.into();
        self.position = position.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_defaults() {
        let owner = Uuid::new_v4();
        let job = Job::new(owner, "Acme", "Engineer", None, None, None);

        assert_eq!(job.company(), "Acme");
        assert_eq!(job.position(), "Engineer");
        assert_eq!(job.status(), JobStatus::Pending);
        assert_eq!(job.job_type(), JobType::FullTime);
        assert_eq!(job.job_location(), DEFAULT_JOB_LOCATION);
        assert_eq!(job.created_by(), owner);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(JobStatus::parse("interview"), Some(JobStatus::Interview));
        assert_eq!(JobStatus::parse("denied"), Some(JobStatus::Denied));
        assert_eq!(JobStatus::parse("bogus"), None);
    }

    #[test]
    fn test_job_type_parse() {
        assert_eq!(JobType::parse("part-time"), Some(JobType::PartTime));
        assert_eq!(JobType::parse("remote"), Some(JobType::Remote));
        assert_eq!(JobType::parse("contract"), None);
    }

    #[test]
    fn test_serialization_is_camel_case() {
        let job = Job::new(Uuid::new_v4(), "Acme", "Engineer", None, None, None);
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["jobType"], "full-time");
        assert_eq!(json["status"], "pending");
        assert!(json.get("jobLocation").is_some());
        assert!(json.get("createdBy").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
