use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::auth::TokenManager;
use crate::extractors::Validate;
use crate::repository::UserRepository;

#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub login: String,
    pub password: String,
}

impl Validate for RegistrationRequest {
    fn validate(&self) -> Result<(), String> {
        if self.login.trim().is_empty() {
            return Err("login is not set".to_string());
        }
        if self.password.is_empty() {
            return Err("password is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.login.trim().is_empty() {
            return Err("login is not set".to_string());
        }
        if self.password.is_empty() {
            return Err("password is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Registration and sign-in.
///
/// Passwords are stored as argon2 PHC strings, never plaintext. A successful
/// sign-in mints an access token whose subject is the user's id.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenManager>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenManager>) -> Self {
        Self { users, tokens }
    }

    /// Create an account and return its id. Logins are unique.
    pub async fn register(&self, req: RegistrationRequest) -> Result<i64, ServiceError> {
        if self.users.find_by_login(&req.login).await?.is_some() {
            return Err(ServiceError::AlreadyExists(req.login));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|err| ServiceError::PasswordHash(err.to_string()))?
            .to_string();

        Ok(self.users.create(&req.login, &password_hash).await?)
    }

    /// Verify credentials and mint an access token.
    ///
    /// Unknown login and wrong password are the same failure, so a caller
    /// cannot probe which logins exist.
    pub async fn login(&self, req: LoginRequest) -> Result<String, ServiceError> {
        let user = self
            .users
            .find_by_login(&req.login)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        let stored = PasswordHash::new(&user.password_hash)
            .map_err(|err| ServiceError::PasswordHash(err.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &stored)
            .is_err()
        {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(self.tokens.issue(&user.id.to_string())?)
    }
}
