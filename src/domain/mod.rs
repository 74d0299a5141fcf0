//! Domain types and traits
//!
//! Entities, validation rules, and repository traits for the two persistent
//! aggregates of the system: users and job applications.

pub mod error;
pub mod job;
pub mod user;

pub use error::DomainError;
