use thiserror::Error;

/// Failure reported by the credential store adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Failure while issuing or verifying a token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Application signing secret is empty")]
    EmptySecret,

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token is expired")]
    Expired,
}

impl From<auth::JwtError> for TokenError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::EmptySecret => TokenError::EmptySecret,
            auth::JwtError::EncodingFailed(e) => TokenError::Signing(e),
            auth::JwtError::DecodingFailed(e) => TokenError::Invalid(e),
            auth::JwtError::TokenExpired => TokenError::Expired,
        }
    }
}

/// Errors returned to callers of the authentication service.
///
/// Messages are safe to send over the wire. `Internal` keeps its detail for
/// server-side logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user, wrong password, unknown application or failed issuance.
    /// All causes share this single value.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("internal error")]
    Internal { detail: String },

    #[error("admin lookup is not available")]
    Unimplemented,

    #[error("user not found")]
    UserNotFound,
}

impl AuthError {
    pub fn internal(detail: impl ToString) -> Self {
        AuthError::Internal {
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_display_hides_detail() {
        let err = AuthError::internal("connection refused to 10.0.0.5:5432");
        assert_eq!(err.to_string(), "internal error");
    }

    #[test]
    fn test_jwt_error_conversion() {
        assert_eq!(
            TokenError::from(auth::JwtError::EmptySecret),
            TokenError::EmptySecret
        );
        assert_eq!(
            TokenError::from(auth::JwtError::TokenExpired),
            TokenError::Expired
        );
    }
}
