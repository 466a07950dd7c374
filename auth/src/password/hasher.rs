use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Well-formed hash at the default cost that no password is expected to match.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c3NvZHVtbXlzYWx0c2FsdA$\
                          taLJYlBhI2bqJy/6xtl0Sq9LRarNlqp8/Lkx7jtVglk";

/// Salted, memory-hard password hashing (Argon2id with the library's default cost).
///
/// One instance is shared for the process lifetime; it holds no mutable state.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing engine rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// The digest comparison is constant-time.
    ///
    /// # Errors
    /// * `Mismatch` - Password does not match the hash
    /// * `VerificationFailed` - Hash is malformed or uses unsupported parameters
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                PasswordHashError::Password => PasswordError::Mismatch,
                other => PasswordError::VerificationFailed(other.to_string()),
            })
    }

    /// Run a full verification against a fixed hash.
    ///
    /// Lets callers spend the same Argon2 cost when there is no stored hash to
    /// check, e.g. for an unknown account. Returns `Mismatch` in practice.
    pub fn verify_dummy(&self, password: &str) -> Result<(), PasswordError> {
        self.verify(password, DUMMY_HASH)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
