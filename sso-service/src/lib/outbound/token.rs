use auth::JwtHandler;
use auth::TokenClaims;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::TokenIssuer;

/// HS256 token issuer keyed by each application's own secret.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Build and sign claims as of `issued_at`.
    pub fn issue_at(
        &self,
        user: &User,
        app: &Application,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let handler = JwtHandler::new(app.secret.as_bytes())?;
        let claims = TokenClaims::new(user.id.0, user.email.as_str(), app.id.0, issued_at, ttl);

        Ok(handler.encode(&claims)?)
    }

    /// Decode a token with `secret` and check it is unexpired now.
    pub fn verify(&self, token: &str, secret: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, secret, Utc::now())
    }

    /// Decode a token with `secret` and check it is unexpired at `now`.
    ///
    /// # Errors
    /// * `EmptySecret` - Secret is empty
    /// * `Invalid` - Signature mismatch or malformed token
    /// * `Expired` - `now` is past the `exp` claim
    pub fn verify_at(
        &self,
        token: &str,
        secret: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, TokenError> {
        let handler = JwtHandler::new(secret.as_bytes())?;
        let claims: TokenClaims = handler.decode_ignoring_expiry(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &Application, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(user, app, ttl, Utc::now())
    }
}
