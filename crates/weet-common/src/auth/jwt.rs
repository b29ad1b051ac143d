//! JWT utilities for authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken`
//! crate. Tokens carry an explicit claims schema with a required `handle`
//! field; claims are validated at decode time. Tokens do not expire, so
//! expiry validation is disabled rather than defaulted.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Handle of the authenticated account
    pub handle: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a handle, stamped with the current time
    pub fn for_handle(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            iat: Utc::now().timestamp(),
        }
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the given signing secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        // Tokens carry no exp claim
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for a handle
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn sign(&self, handle: &str) -> Result<String, AppError> {
        let claims = Claims::for_handle(handle);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token, verifying the signature against the
    /// service's own secret
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the token is malformed, was
    /// signed elsewhere, or its claims do not match the schema
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check whether the token's signature was produced with this service's
    /// secret; fails closed to false on any decode failure
    #[must_use]
    pub fn verify_origin(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService").finish_non_exhaustive()
    }
}
