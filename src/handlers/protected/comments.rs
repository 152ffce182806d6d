use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::auth::CallerIdentity;
use crate::error::ApiError;
use crate::extractors::{json_body, path_id, require_id, validated, validated_json};
use crate::models::Comment;
use crate::respond::{affected, listing};
use crate::services::comments::{CreateCommentRequest, UpdateCommentRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comment/api", post(create))
        .route("/comment/api/:id", put(update).delete(remove))
        .route("/comment/api/user/:id", get(by_user))
}

/// POST /comment/api - post a comment as the caller, returns the new id
async fn create(
    State(state): State<AppState>,
    identity: CallerIdentity,
    body: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let req = validated_json(body)?;
    let user_id = identity.user_id()?;

    let id = state
        .comments
        .create(user_id, req)
        .await
        .map_err(|err| ApiError::failed("couldn't create comment", err))?;

    Ok(Json(id))
}

/// GET /comment/api/user/:id - list comments of one user
async fn by_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let user_id = require_id(path_id(path)?)?;

    let comments = state
        .comments
        .by_user(user_id)
        .await
        .map_err(|err| ApiError::failed("couldn't list comments", err))?;

    listing(comments)
}

/// PUT /comment/api/:id - edit a comment's message, returns the touched id
async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = path_id(path)?;
    let req = json_body(body)?;

    let id = require_id(id)?;
    let req = validated(req)?;

    let updated = state
        .comments
        .update(id, req)
        .await
        .map_err(|err| ApiError::failed("couldn't update comment", err))?;

    affected(updated)
}

/// DELETE /comment/api/:id - delete a comment, returns the touched id
async fn remove(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = require_id(path_id(path)?)?;

    let deleted = state
        .comments
        .delete(id)
        .await
        .map_err(|err| ApiError::failed("couldn't delete comment", err))?;

    affected(deleted)
}
