use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::CallerIdentity;
use crate::error::ApiError;
use crate::state::AppState;

/// Authentication gate for the protected route tree.
///
/// Verifies the bearer token and injects a [`CallerIdentity`] into request
/// extensions before the handler runs. Requests that fail any step are
/// rejected with 401 and never reach a handler.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).map_err(|err| {
        tracing::warn!("authentication failed: {}", err);
        err
    })?;

    let subject = state.tokens.parse(token).map_err(|_| {
        tracing::warn!("authentication failed: invalid bearer token");
        ApiError::unauthorized("invalid or expired token")
    })?;

    request.extensions_mut().insert(CallerIdentity { subject });

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid Authorization header format"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use Bearer scheme"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("empty bearer token"));
    }

    Ok(token)
}
