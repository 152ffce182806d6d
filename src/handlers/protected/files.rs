use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::extractors::{json_body, path_id, require_id, validated, validated_json};
use crate::models::StoredFile;
use crate::respond::{affected, found, listing};
use crate::services::files::{CreateFileRequest, UpdateFileRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/file/api", get(list).post(create))
        .route("/file/api/:id", get(fetch).put(update).delete(remove))
        .route("/file/api/author/:id", get(by_author))
}

/// POST /file/api - list a file for sale, returns the new id
async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateFileRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let req = validated_json(body)?;

    let id = state
        .files
        .create(req)
        .await
        .map_err(|err| ApiError::failed("couldn't create file", err))?;

    Ok(Json(id))
}

/// GET /file/api - list all files
async fn list(State(state): State<AppState>) -> Result<Json<Vec<StoredFile>>, ApiError> {
    let files = state
        .files
        .list()
        .await
        .map_err(|err| ApiError::failed("couldn't list files", err))?;

    listing(files)
}

/// GET /file/api/:id - fetch one file
async fn fetch(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<StoredFile>, ApiError> {
    let id = require_id(path_id(path)?)?;

    let file = state
        .files
        .get(id)
        .await
        .map_err(|err| ApiError::failed("couldn't get file", err))?;

    found(file)
}

/// GET /file/api/author/:id - list the files of one author
async fn by_author(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<StoredFile>>, ApiError> {
    let author_id = require_id(path_id(path)?)?;

    let files = state
        .files
        .by_author(author_id)
        .await
        .map_err(|err| ApiError::failed("couldn't list files", err))?;

    listing(files)
}

/// PUT /file/api/:id - update name and price, returns the touched id
async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateFileRequest>, JsonRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = path_id(path)?;
    let req = json_body(body)?;

    let id = require_id(id)?;
    let req = validated(req)?;

    let updated = state
        .files
        .update(id, req)
        .await
        .map_err(|err| ApiError::failed("couldn't update file", err))?;

    affected(updated)
}

/// DELETE /file/api/:id - take a file off sale, returns the touched id
async fn remove(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<i64>, ApiError> {
    let id = require_id(path_id(path)?)?;

    let deleted = state
        .files
        .delete(id)
        .await
        .map_err(|err| ApiError::failed("couldn't delete file", err))?;

    affected(deleted)
}
