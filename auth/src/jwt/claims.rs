use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by an SSO access token.
///
/// Field names on the wire are `userId`, `email`, `appId`, `exp`, `iat` and
/// `jti`. The random `jti` makes every issued token unique even when two are
/// signed within the same second.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,

    pub email: String,

    #[serde(rename = "appId")]
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Token identifier
    pub jti: String,
}

impl TokenClaims {
    /// Build claims for a user signing in to an application.
    ///
    /// # Arguments
    /// * `user_id` - Store-assigned user identifier
    /// * `email` - User email
    /// * `app_id` - Issuing application identifier
    /// * `issued_at` - Issue instant, `exp` is `issued_at + ttl`
    /// * `ttl` - Token lifetime
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            app_id,
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is still valid at exactly its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
