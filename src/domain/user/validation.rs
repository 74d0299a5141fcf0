//! User field validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Please provide name")]
    EmptyName,

    #[error("Name must be at least {0} characters")]
    NameTooShort(usize),

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Please provide email")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please provide a valid password")]
    EmptyPassword,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("{field} exceeds maximum length of {max} characters")]
    ProfileFieldTooLong { field: &'static str, max: usize },
}

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 128;
const MAX_PROFILE_FIELD_LENGTH: usize = 20;

// Deliberately loose: one '@', a dot in the domain part, no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used, reason = "pattern is a compile-time constant")]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// Validate a display name (3..=50 characters)
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(UserValidationError::NameTooShort(MIN_NAME_LENGTH));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address format
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a plaintext password before hashing (6..=128 characters)
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate an optional profile field (lastname, location; <=20 characters)
pub fn validate_profile_field(
    field: &'static str,
    value: &str,
) -> Result<(), UserValidationError> {
    if value.chars().count() > MAX_PROFILE_FIELD_LENGTH {
        return Err(UserValidationError::ProfileFieldTooLong {
            field,
            max: MAX_PROFILE_FIELD_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("Ada Lovelace").is_ok());
    }

    #[test]
    fn test_name_bounds() {
        assert_eq!(validate_name(""), Err(UserValidationError::EmptyName));
        assert_eq!(validate_name("ab"), Err(UserValidationError::NameTooShort(3)));
        assert_eq!(
            validate_name(&"x".repeat(51)),
            Err(UserValidationError::NameTooLong(50))
        );
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a@b"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("a b@example.com"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("secret1").is_ok());
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
        assert_eq!(
            validate_password("12345"),
            Err(UserValidationError::PasswordTooShort(6))
        );
        assert_eq!(
            validate_password(&"x".repeat(129)),
            Err(UserValidationError::PasswordTooLong(128))
        );
    }

    #[test]
    fn test_profile_field() {
        assert!(validate_profile_field("lastname", "Lovelace").is_ok());
        assert_eq!(
            validate_profile_field("location", &"x".repeat(21)),
            Err(UserValidationError::ProfileFieldTooLong {
                field: "location",
                max: 20
            })
        );
    }
}
