use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::extractors::{json_body, path_id, require_id, validated, validated_json};
use crate::models::Author;
use crate::respond::{affected, found, listing};
use crate::services::authors::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/author/api", get(list).post(create))
        .route("/author/api/:id", get(fetch).put(update).delete(remove))
}

/// POST /author/api - create an author, returns the new id
async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let req = validated_json(body)?;

    let id = state
        .authors
        .create(req)
        .await
        .map_err(|err| ApiError::failed("couldn't create author", err))?;

    Ok(Json(id))
}

/// GET /author/api - list all authors
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Author>>, ApiError> {
    let authors = state
        .authors
        .list()
        .await
        .map_err(|err| ApiError::failed("couldn't list authors", err))?;

    listing(authors)
}

/// GET /author/api/:id - fetch one author
async fn fetch(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Author>, ApiError> {
    let id = require_id(path_id(path)?)?;

    let author = state
        .authors
        .get(id)
        .await
        .map_err(|err| ApiError::failed("couldn't get author", err))?;

    found(author)
}

/// PUT /author/api/:id - rename an author, returns the touched id
async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = path_id(path)?;
    let req = json_body(body)?;

    let id = require_id(id)?;
    let req = validated(req)?;

    let updated = state
        .authors
        .update(id, req)
        .await
        .map_err(|err| ApiError::failed("couldn't update author", err))?;

    affected(updated)
}

/// DELETE /author/api/:id - delete an author, returns the touched id
async fn remove(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = require_id(path_id(path)?)?;

    let deleted = state
        .authors
        .delete(id)
        .await
        .map_err(|err| ApiError::failed("couldn't delete author", err))?;

    affected(deleted)
}
