use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::auth::CallerIdentity;
use crate::error::ApiError;
use crate::extractors::{path_id, require_id, validated_json};
use crate::models::Purchase;
use crate::respond::listing;
use crate::services::purchases::{CreatePurchaseRequest, PeriodRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purchase/api", post(create))
        .route("/purchase/api/user/:id", get(by_user))
        .route("/purchase/api/period", post(in_period))
}

/// POST /purchase/api - record a purchase for the caller, returns the new id
///
/// The buyer is the authenticated caller. A client cannot order on behalf
/// of another user, whatever it puts in the body.
async fn create(
    State(state): State<AppState>,
    identity: CallerIdentity,
    body: Result<Json<CreatePurchaseRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let req = validated_json(body)?;
    let user_id = identity.user_id()?;

    let id = state
        .purchases
        .create(user_id, req)
        .await
        .map_err(|err| ApiError::failed("couldn't create purchase", err))?;

    Ok(Json(id))
}

/// GET /purchase/api/user/:id - list purchases of one user
async fn by_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Purchase>>, ApiError> {
    let user_id = require_id(path_id(path)?)?;

    let purchases = state
        .purchases
        .by_user(user_id)
        .await
        .map_err(|err| ApiError::failed("couldn't list purchases", err))?;

    listing(purchases)
}

/// POST /purchase/api/period - list purchases ordered inside a period
async fn in_period(
    State(state): State<AppState>,
    body: Result<Json<PeriodRequest>, JsonRejection>,
) -> Result<Json<Vec<Purchase>>, ApiError> {
    let req = validated_json(body)?;

    let purchases = state
        .purchases
        .in_period(req)
        .await
        .map_err(|err| ApiError::failed("couldn't list purchases", err))?;

    listing(purchases)
}
