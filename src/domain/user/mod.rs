//! User domain
//!
//! Entity, validation rules, and the repository trait for user accounts.

mod entity;
mod repository;
mod validation;

pub use entity::{DEFAULT_LASTNAME, DEFAULT_LOCATION, User, UserRole};
pub use repository::UserRepository;
pub use validation::{
    UserValidationError, validate_email, validate_name, validate_password, validate_profile_field,
};
