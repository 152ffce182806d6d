use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT payload. The subject is the user id rendered as a string.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("signing key must not be empty")]
    InvalidConfig,
    #[error("token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    InvalidToken,
}

/// Issues and verifies HS256 access tokens.
///
/// Built once at startup from the configured signing key and handed to
/// whoever needs it. Construction fails on an empty key so a misconfigured
/// process never starts handing out forgeable tokens.
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenManager {
    pub fn new(signing_key: &str, ttl: Duration) -> Result<Self, AuthError> {
        if signing_key.is_empty() {
            return Err(AuthError::InvalidConfig);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding: DecodingKey::from_secret(signing_key.as_bytes()),
            ttl,
        })
    }

    /// Sign a token for `subject`, expiring after the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Signing)
    }

    /// Verify a token and return its subject.
    ///
    /// All failure modes (bad signature, expired, wrong algorithm, garbage)
    /// collapse into `InvalidToken`. The reason goes to the debug log only.
    pub fn parse(&self, token: &str) -> Result<String, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims.sub)
            .map_err(|err| {
                tracing::debug!("token rejected: {}", err);
                AuthError::InvalidToken
            })
    }
}
