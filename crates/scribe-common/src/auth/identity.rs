//! Verification of externally issued identity tokens
//!
//! The identity provider signs HS256 access tokens with a shared secret.
//! Every handler resolves the caller through [`IdentityVerifier::verify`]
//! and never re-derives identity any other way.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use scribe_core::Snowflake;

/// Claims carried by an identity provider access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's snowflake id as a decimal string
    pub sub: String,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
    /// Issued-at (Unix epoch seconds)
    pub iat: i64,
}

impl Claims {
    /// Parse the subject into a user id
    pub fn user_id(&self) -> Result<Snowflake, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// A verified caller identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Snowflake,
}

/// Errors produced while verifying a token
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid identity token")]
    InvalidToken,

    #[error("identity token expired")]
    Expired,
}

/// Verifier for identity provider access tokens
#[derive(Clone)]
pub struct IdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl IdentityVerifier {
    /// Create a verifier from the shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and extract the caller's identity
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id = data.claims.user_id()?;
        Ok(Identity { user_id })
    }
}

impl std::fmt::Debug for IdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityVerifier").finish_non_exhaustive()
    }
}
