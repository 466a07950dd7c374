use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash could not be parsed or the engine rejected its parameters.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Password does not match")]
    Mismatch,
}
