use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Single mapping point from domain errors to wire status codes.
///
/// Messages come from `AuthError`'s `Display`, which never carries internal
/// detail.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::unauthenticated(err.to_string()),
            AuthError::Internal { .. } => Status::internal(err.to_string()),
            AuthError::Unimplemented => Status::unimplemented(err.to_string()),
            AuthError::UserNotFound => Status::not_found(err.to_string()),
        }
    }
}
