use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppRepository;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::UserRepository;

/// Tunables for the authentication service.
#[derive(Debug, Clone, Copy)]
pub struct AuthSettings {
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// When false, `is_admin` reports `Unimplemented` without touching the store
    pub admin_lookup_enabled: bool,
}

/// Domain service implementation for authentication.
///
/// Stateless apart from its injected collaborators, so one instance serves all
/// in-flight requests.
pub struct AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: AppRepository,
    TI: TokenIssuer,
{
    users: Arc<UR>,
    apps: Arc<AR>,
    token_issuer: Arc<TI>,
    password_hasher: auth::PasswordHasher,
    settings: AuthSettings,
}

impl<UR, AR, TI> AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: AppRepository,
    TI: TokenIssuer,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `apps` - Application lookup implementation
    /// * `token_issuer` - Token signing implementation
    /// * `settings` - Token lifetime and admin lookup switch
    pub fn new(
        users: Arc<UR>,
        apps: Arc<AR>,
        token_issuer: Arc<TI>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            users,
            apps,
            token_issuer,
            password_hasher: auth::PasswordHasher::new(),
            settings,
        }
    }
}

#[async_trait]
impl<UR, AR, TI> AuthServicePort for AuthService<UR, AR, TI>
where
    UR: UserRepository,
    AR: AppRepository,
    TI: TokenIssuer,
{
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "auth.login";
        let LoginCommand {
            email,
            password,
            app_id,
        } = command;

        tracing::info!(op = OP, email = %email, app_id = %app_id, "Attempting to login");

        let user = match self.users.find_by_email(&email).await {
            Ok(user) => user,
            Err(StorageError::NotFound) => {
                // Same Argon2 cost as a wrong password
                if let Err(auth::PasswordError::VerificationFailed(e)) =
                    self.password_hasher.verify_dummy(&password)
                {
                    tracing::error!(op = OP, error = %e, "Dummy hash rejected");
                }
                tracing::warn!(op = OP, email = %email, "User not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(op = OP, email = %email, error = %e, "Failed to load user");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if let Err(e) = self.password_hasher.verify(&password, &user.password_hash) {
            tracing::warn!(op = OP, user_id = %user.id, error = %e, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }
        drop(password);

        let app = self.apps.find_by_id(app_id).await.map_err(|e| {
            tracing::warn!(op = OP, app_id = %app_id, error = %e, "Application lookup failed");
            AuthError::InvalidCredentials
        })?;

        let token = self
            .token_issuer
            .issue(&user, &app, self.settings.token_ttl)
            .map_err(|e| {
                tracing::error!(
                    op = OP,
                    user_id = %user.id,
                    app_id = %app_id,
                    error = %e,
                    "Token issuance failed"
                );
                AuthError::InvalidCredentials
            })?;

        tracing::info!(op = OP, user_id = %user.id, app_id = %app_id, "User logged in");
        Ok(token)
    }

    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register";
        let RegisterCommand {
            name,
            email,
            password,
        } = command;

        tracing::info!(op = OP, email = %email, "Registering user");

        let password_hash = self.password_hasher.hash(&password).map_err(|e| {
            tracing::error!(op = OP, email = %email, error = %e, "Failed to hash password");
            AuthError::internal(e)
        })?;
        drop(password);

        let user_id = self
            .users
            .save_user(&name, &email, &password_hash)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, email = %email, error = %e, "Failed to save user");
                AuthError::internal(e)
            })?;

        tracing::info!(op = OP, user_id = %user_id, "User registered");
        Ok(user_id)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        if !self.settings.admin_lookup_enabled {
            tracing::warn!(op = OP, user_id = %user_id, "Admin lookup requested while disabled");
            return Err(AuthError::Unimplemented);
        }

        match self.users.is_admin(user_id).await {
            Ok(is_admin) => {
                tracing::debug!(op = OP, user_id = %user_id, is_admin, "Admin flag resolved");
                Ok(is_admin)
            }
            Err(StorageError::NotFound) => Err(AuthError::UserNotFound),
            Err(e) => {
                tracing::error!(
                    op = OP,
                    user_id = %user_id,
                    error = %e,
                    "Failed to read admin flag"
                );
                Err(AuthError::internal(e))
            }
        }
    }
}
