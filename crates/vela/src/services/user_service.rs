//! Request handling for the user resource, independent of the HTTP framework.
//!
//! Each function takes the store and an already-extracted [`UserRequest`] and
//! returns either an [`ApiResponse`] or an [`Error`] that the boundary turns
//! into a status code.

use serde_json::json;
use tracing::{debug, info};

use crate::controllers::payloads::UserRequest;
use crate::errors::{Error, Result};
use crate::store::UserStore;
use crate::utils::api_response::ApiResponse;
use crate::utils::best_records::{is_better_score, is_better_time};
use crate::utils::parse_number::{float_field, int_field, parse_user_id};

pub const SCORE_FIELD: &str = "unityBestScore";
pub const TIME_FIELD: &str = "unrealBestTime";

/// Creates a user, or hands back the existing id when the username is taken.
pub async fn create(store: &dyn UserStore, request: UserRequest) -> Result<ApiResponse> {
    if !request.is_json() {
        return Err(Error::InvalidContentType);
    }

    let payload = request
        .json_object()
        .map_err(|reason| Error::MalformedBody { reason })?;

    if let Some(username) = payload.get("username").and_then(|v| v.as_str()) {
        if let Some(existing) = store.find_by_username(username).await? {
            debug!(id = existing.id, username, "user already exists");
            return Ok(ApiResponse::ok(json!({
                "msg": "User already exists",
                "id": existing.id,
            })));
        }
    }

    let user = store.insert(payload).await?;
    info!(id = user.id, username = %user.username, "user created");

    Ok(ApiResponse::created(json!({
        "msg": "User created successfully",
        "id": user.id,
    })))
}

/// All users. An empty table is reported as not found.
pub async fn list(store: &dyn UserStore) -> Result<ApiResponse> {
    let users = store.all().await?;

    if users.is_empty() {
        return Err(Error::NoUsersFound);
    }

    Ok(ApiResponse::ok(json!(users)))
}

/// One user by id. An id of 0 is rejected together with non-numeric ids.
pub async fn find_one(store: &dyn UserStore, request: UserRequest) -> Result<ApiResponse> {
    let id = match request.id.as_deref().and_then(parse_user_id) {
        Some(id) if id != 0 => id,
        _ => return Err(Error::InvalidUserId),
    };
    let id = column_id(id)?;

    let user = store
        .find_by_id(id)
        .await?
        .ok_or(Error::UserNotFound { id: id.into() })?;

    Ok(ApiResponse::ok(json!({ "data": user })))
}

pub async fn update_score(store: &dyn UserStore, request: UserRequest) -> Result<ApiResponse> {
    let id = path_id(&request)?;
    let payload = request
        .json_object()
        .map_err(|reason| Error::MalformedBody { reason })?;

    let raw = payload
        .get(SCORE_FIELD)
        .filter(|v| !v.is_null())
        .ok_or(Error::MissingParams { field: SCORE_FIELD })?;
    let score = int_field(raw)
        .and_then(|s| i32::try_from(s).ok())
        .ok_or(Error::InvalidParams { field: SCORE_FIELD })?;

    let id = column_id(id)?;
    let user = store
        .find_by_id(id)
        .await?
        .ok_or(Error::UserNotFound { id: id.into() })?;

    if !is_better_score(user.unity_best_score, score) {
        debug!(id, score, stored = ?user.unity_best_score, "score not an improvement");
        return Ok(not_improved("Score not higher than current best"));
    }

    match store.raise_best_score(id, score).await? {
        Some(updated) => {
            info!(id, score, "best score updated");
            Ok(ApiResponse::ok(json!({ "msg": "Best score updated", "data": updated })))
        }
        None => Ok(not_improved("Score not higher than current best")),
    }
}

pub async fn update_best_time(store: &dyn UserStore, request: UserRequest) -> Result<ApiResponse> {
    let id = path_id(&request)?;
    let payload = request
        .json_object()
        .map_err(|reason| Error::MalformedBody { reason })?;

    let raw = payload
        .get(TIME_FIELD)
        .filter(|v| !v.is_null())
        .ok_or(Error::MissingParams { field: TIME_FIELD })?;
    let time = float_field(raw)
        .filter(|t| t.is_finite())
        .ok_or(Error::InvalidParams { field: TIME_FIELD })?;

    let id = column_id(id)?;
    let user = store
        .find_by_id(id)
        .await?
        .ok_or(Error::UserNotFound { id: id.into() })?;

    if !is_better_time(user.unreal_best_time, time) {
        debug!(id, time, stored = ?user.unreal_best_time, "time not an improvement");
        return Ok(not_improved("Time not lower than current best"));
    }

    match store.lower_best_time(id, time).await? {
        Some(updated) => {
            info!(id, time, "best time updated");
            Ok(ApiResponse::ok(json!({ "msg": "Best time updated", "data": updated })))
        }
        None => Ok(not_improved("Time not lower than current best")),
    }
}

// Update routes only reject ids that are not numbers; 0 is looked up like any
// other id and ends in a 404.
fn path_id(request: &UserRequest) -> Result<i64> {
    request
        .id
        .as_deref()
        .and_then(parse_user_id)
        .ok_or(Error::InvalidUserId)
}

// Ids beyond the column range cannot name a row.
fn column_id(id: i64) -> Result<i32> {
    i32::try_from(id).map_err(|_| Error::UserNotFound { id })
}

fn not_improved(msg: &str) -> ApiResponse {
    ApiResponse::ok(json!({ "msg": msg }))
}
