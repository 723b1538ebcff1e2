use crate::error::{self, AppError};
use crate::models::UserResponse;
use crate::services::user_service::UserServiceError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

/// GET /users - All users as `{name, email}`
pub async fn list_users(State(state): State<AppState>) -> error::Result<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users - Create a user from a JSON body
///
/// The body is parsed regardless of Content-Type; anything that is not a
/// JSON object with `name` and `email` keys counts as missing fields.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return AppError::from(UserServiceError::MissingFields).into_response(),
    };

    match state.user_service.create_user(&payload).await {
        Ok(_) => Json(json!({ "message": "User created successfully" })).into_response(),
        Err(e) => error::write_failure(e),
    }
}

/// GET /users/{id} - One user, or 404
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> error::Result<Json<UserResponse>> {
    let id = parse_user_id(&raw_id).ok_or(AppError::NotFound)?;
    let user = state.user_service.find_user_by_id(id).await?;
    Ok(Json(user.into()))
}

/// Only plain non-negative decimal ids route to a user.
fn parse_user_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
