use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// HS256 token handler bound to a single signing secret.
///
/// Generic over the claims type. Cheap to build, so callers holding
/// per-application secrets create one per signing operation.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler for `secret`.
    ///
    /// # Errors
    /// * `EmptySecret` - Secret has zero length
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, checking signature and a mandatory `exp` claim against
    /// the current time with no leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `DecodingFailed` - Signature invalid, token malformed or `exp` missing
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        self.decode_with(token, &validation)
    }

    /// Decode a token checking only its signature.
    ///
    /// Expiry is left to the caller, which lets it evaluate the token at an
    /// arbitrary instant.
    ///
    /// # Errors
    /// * `DecodingFailed` - Signature invalid or token malformed
    pub fn decode_ignoring_expiry<T: for<'de> Deserialize<'de>>(
        &self,
        token: &str,
    ) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        self.decode_with(token, &validation)
    }

    fn decode_with<T: for<'de> Deserialize<'de>>(
        &self,
        token: &str,
        validation: &Validation,
    ) -> Result<T, JwtError> {
        decode::<T>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingFailed(e.to_string()),
            })
    }
}
