use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::extractors::validated_json;
use crate::services::users::{LoginRequest, RegistrationRequest, TokenResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/registration", post(registration))
        .route("/user/login", post(login))
}

/// POST /user/registration - create an account, returns the new user id
async fn registration(
    State(state): State<AppState>,
    body: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let req = validated_json(body)?;

    let id = state
        .users
        .register(req)
        .await
        .map_err(|err| ApiError::failed("couldn't register user", err))?;

    Ok(Json(id))
}

/// POST /user/login - verify credentials, returns an access token
async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let req = validated_json(body)?;

    let token = state
        .users
        .login(req)
        .await
        .map_err(|err| ApiError::failed("couldn't sign in", err))?;

    Ok(Json(TokenResponse { token }))
}
