use email_address::EmailAddress;
use thiserror::Error;

/// Structural problem with a request field.
///
/// Messages are fixed and never echo the submitted value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email")]
    Email,

    #[error("invalid password")]
    Password,

    #[error("invalid name")]
    Name,

    #[error("invalid app_id")]
    AppId,

    #[error("invalid user_id")]
    UserId,
}

impl From<ValidationError> for tonic::Status {
    fn from(err: ValidationError) -> Self {
        tonic::Status::invalid_argument(err.to_string())
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Password)
    } else {
        Ok(())
    }
}

/// Names are required and ASCII letters only.
pub fn name(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(ValidationError::Name)
    }
}

pub fn app_id(value: i32) -> Result<(), ValidationError> {
    if value <= 0 {
        Err(ValidationError::AppId)
    } else {
        Ok(())
    }
}

pub fn user_id(value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        Err(ValidationError::UserId)
    } else {
        Ok(())
    }
}
