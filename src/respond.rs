//! Outcome shaping shared by all handlers.
//!
//! A lookup that matches nothing, a write that touched no rows and an empty
//! listing are all the same wire outcome: 404 with no body. These helpers
//! fold that convention into the return position of a handler.

use axum::Json;

use crate::error::ApiError;

/// A single-record lookup. `None` becomes the empty 404.
pub fn found<T>(record: Option<T>) -> Result<Json<T>, ApiError> {
    record.map(Json).ok_or(ApiError::Empty)
}

/// A write reported by the id it touched, `0` meaning no row matched.
pub fn affected(id: i64) -> Result<Json<i64>, ApiError> {
    if id == 0 {
        Err(ApiError::Empty)
    } else {
        Ok(Json(id))
    }
}

/// A listing. No matches becomes the empty 404 rather than `[]`.
pub fn listing<T>(records: Vec<T>) -> Result<Json<Vec<T>>, ApiError> {
    if records.is_empty() {
        Err(ApiError::Empty)
    } else {
        Ok(Json(records))
    }
}
