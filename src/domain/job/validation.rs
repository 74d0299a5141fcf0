//! Job field validation

use thiserror::Error;

/// Errors that can occur during job validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JobValidationError {
    #[error("Please provide company")]
    EmptyCompany,

    #[error("Company exceeds maximum length of {0} characters")]
    CompanyTooLong(usize),

    #[error("Please provide position")]
    EmptyPosition,

    #[error("Position exceeds maximum length of {0} characters")]
    PositionTooLong(usize),
}

const MAX_COMPANY_LENGTH: usize = 50;
const MAX_POSITION_LENGTH: usize = 100;

/// Validate a company name (required, <=50 characters)
pub fn validate_company(company: &str) -> Result<(), JobValidationError> {
    if company.is_empty() {
        return Err(JobValidationError::EmptyCompany);
    }

    if company.chars().count() > MAX_COMPANY_LENGTH {
        return Err(JobValidationError::CompanyTooLong(MAX_COMPANY_LENGTH));
    }

    Ok(())
}

/// Validate a position title (required, <=100 characters)
pub fn validate_position(position: &str) -> Result<(), JobValidationError> {
    if position.is_empty() {
        return Err(JobValidationError::EmptyPosition);
    }

    if position.chars().count() > MAX_POSITION_LENGTH {
        return Err(JobValidationError::PositionTooLong(MAX_POSITION_LENGTH));
    }

    Ok(())
}
