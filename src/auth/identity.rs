use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

/// Authenticated caller, inserted into request extensions by the
/// authentication middleware. Handlers that need to know who is calling
/// take this as an extractor argument.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub subject: String,
}

impl CallerIdentity {
    /// The caller's user id. Subjects are minted from numeric ids at login,
    /// so a non-numeric subject means the token did not come from us.
    pub fn user_id(&self) -> Result<i64, ApiError> {
        self.subject
            .parse()
            .map_err(|_| ApiError::unauthorized("invalid token subject"))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("missing caller identity"))
    }
}
