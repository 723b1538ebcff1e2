use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::user_service::UserServiceError;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    User(#[from] UserServiceError),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound | AppError::User(UserServiceError::UserNotFound) => {
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::AuthenticationRequired => {
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            // Write failures of every kind surface their message to the client.
            AppError::User(
                e @ (UserServiceError::MissingFields
                | UserServiceError::Validation(_)
                | UserServiceError::EmailTaken(_)),
            ) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::User(UserServiceError::RepositoryError(e)) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Writes report storage failures as 400 with the raw message, unlike reads.
pub fn write_failure(err: UserServiceError) -> Response {
    match err {
        UserServiceError::RepositoryError(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        other => AppError::from(other).into_response(),
    }
}
