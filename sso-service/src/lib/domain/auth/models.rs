use std::fmt;

/// Registered user as held by the credential store.
///
/// The core only ever sees transient copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never the plaintext
    pub password_hash: String,
}

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relying party allowed to request tokens for its users.
#[derive(Clone, PartialEq, Eq)]
pub struct Application {
    pub id: AppId,
    pub name: String,
    /// HMAC signing secret
    pub secret: String,
}

// Keeps the secret out of logs.
impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Application identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Input for a login attempt
///
/// Holds the plaintext password and must not implement `Debug`.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub app_id: AppId,
}

impl LoginCommand {
    pub fn new(email: String, password: String, app_id: AppId) -> Self {
        Self {
            email,
            password,
            app_id,
        }
    }
}

/// Input for a new registration
pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, unique per user
    /// * `password` - Plain text password (hashed by the service, then dropped)
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}
