//! Infrastructure implementations
//!
//! Concrete repositories, password hashing, token signing, storage
//! connections, and logging setup.

pub mod auth;
pub mod job;
pub mod logging;
pub mod storage;
pub mod user;
