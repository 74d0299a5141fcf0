//! Job infrastructure
//!
//! In-memory and PostgreSQL repositories plus the job service used by the
//! job handlers.

pub(crate) mod in_memory;
mod postgres;
mod service;

pub use in_memory::InMemoryJobRepository;
pub use postgres::PostgresJobRepository;
pub use service::{CreateJobRequest, JobService};
