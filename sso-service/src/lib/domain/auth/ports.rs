use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for the authentication operations exposed to the transport layer.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token for the requested application.
    ///
    /// # Returns
    /// Signed, non-empty token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, unknown
    ///   application or token issuance failure, indistinguishably
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Hash the password and store a new user.
    ///
    /// # Returns
    /// Store-assigned user id
    ///
    /// # Errors
    /// * `Internal` - Hashing failed or the store rejected the insert
    ///   (including a duplicate email)
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Report whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `Unimplemented` - Admin lookup is disabled in configuration
    /// * `UserNotFound` - No user with this id
    /// * `Internal` - Store failure
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new user.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserId, StorageError>;

    /// Retrieve a user by email.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<User, StorageError>;

    /// Read the admin flag of a user.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Read access to registered applications.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// # Errors
    /// * `NotFound` - No application with this id
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, app_id: AppId) -> Result<Application, StorageError>;
}

/// Builds signed, time-bound tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Sign a token for `user` with `app`'s secret, expiring after `ttl`.
    ///
    /// # Errors
    /// * `EmptySecret` - Application secret is empty
    /// * `Signing` - Signing primitive failed
    fn issue(&self, user: &User, app: &Application, ttl: Duration) -> Result<String, TokenError>;
}
