//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JSON Web Tokens embedding the user's external ID,
//! username, and role. There is no refresh, rotation, or revocation: a
//! token is valid until it expires, and presenting it reproduces exactly
//! the claims it was issued with.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use adorly_core::Role;

use crate::models::UserIdentity;

/// Token lifetime in seconds (7 days).
const TOKEN_TTL_SECS: u64 = 7 * 24 * 3600;

/// Errors from token issuance or verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (should not happen with a valid key).
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The presented token is malformed, has a bad signature, or expired.
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// System clock is before the Unix epoch.
    #[error("system clock error: {0}")]
    Clock(#[from] std::time::SystemTimeError),
}

/// JSON Web Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's external identity ID.
    pub sub: String,
    /// Username at issuance time.
    pub username: String,
    /// Role at issuance time; roles never change, so this is authoritative.
    pub role: Role,
    /// Time at which the token was issued (Unix seconds).
    pub iat: u64,
    /// Time after which the token expires (Unix seconds).
    pub exp: u64,
}

/// The identity attached to a request after its bearer token verified.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<Claims> for AuthedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Signs and verifies bearer tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a fresh token for a user identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails, or
    /// `TokenError::Clock` if the system clock is unusable.
    pub fn issue(&self, user: &UserIdentity) -> Result<String, TokenError> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        let claims = Claims {
            sub: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the token is malformed, carries a
    /// bad signature, or has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(TokenError::Invalid)?;

        Ok(data.claims)
    }
}
