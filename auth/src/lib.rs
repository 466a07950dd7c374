//! Authentication primitives for the SSO service
//!
//! - Password hashing (Argon2id)
//! - HS256 token encoding and decoding with per-application secrets
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{JwtHandler, TokenClaims};
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::new(b"appsecret").unwrap();
//! let claims = TokenClaims::new(1, "alice@example.com", 1, Utc::now(), Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: TokenClaims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.user_id, 1);
//! ```

pub mod jwt;
pub mod password;

pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
