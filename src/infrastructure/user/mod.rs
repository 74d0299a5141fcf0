//! User infrastructure
//!
//! Argon2 password hashing, in-memory and PostgreSQL repositories, and the
//! user service used by the auth handlers.

pub(crate) mod in_memory;
pub(crate) mod password;
mod postgres;
mod service;

pub use in_memory::InMemoryUserRepository;
pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres::PostgresUserRepository;
pub use service::{RegisterRequest, UpdateProfileRequest, UserService};
