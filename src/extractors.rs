//! Request admission helpers.
//!
//! Every endpoint runs the same two phases before its service is called:
//! first the wire request is decoded into a typed value (a failure here is
//! [`ApiError::Malformed`]), then business rules are checked on the decoded
//! value ([`ApiError::InvalidValue`]). Decoding always completes before any
//! rule runs, so a rule failure means the request was well-formed.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::error::ApiError;

/// Business rules for a decoded request, checked after decoding succeeds.
pub trait Validate {
    /// Returns a client-facing message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Decode a JSON body, mapping deserialization failures to a 400.
pub fn json_body<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| ApiError::malformed(err.body_text()))
}

/// Decode a JSON body and check its business rules.
///
/// The one-stop helper for endpoints whose request is the body alone:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., ApiError> {
///     let req = validated_json(body)?;
///     // dispatch req...
/// }
/// ```
pub fn validated_json<T: Validate>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    validated(json_body(result)?)
}

/// Check business rules on an already-decoded request.
///
/// Used by handlers that assemble their request from several wire parts
/// (path id plus body) and validate the whole once built.
pub fn validated<T: Validate>(request: T) -> Result<T, ApiError> {
    request.validate().map_err(ApiError::invalid_value)?;
    Ok(request)
}

/// Decode a numeric id path segment, mapping parse failures to a 400.
pub fn path_id(result: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    result
        .map(|Path(id)| id)
        .map_err(|err| ApiError::malformed(err.body_text()))
}

/// The business rule shared by every endpoint that addresses a row by id:
/// ids are positive. `0` decodes fine and is rejected here.
pub fn require_id(id: i64) -> Result<i64, ApiError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ApiError::invalid_value("not correct id"))
    }
}
