use crate::{error::AppError, AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// How routes marked `requires_auth` are guarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Admit every request. Matches the historical behaviour of `/protected`.
    #[default]
    Disabled,
    /// Require `Authorization: Bearer <token>` with this exact token.
    BearerToken(String),
}

impl AuthPolicy {
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => AuthPolicy::BearerToken(token),
            _ => AuthPolicy::Disabled,
        }
    }

    pub fn is_satisfied_by(&self, headers: &HeaderMap) -> bool {
        match self {
            AuthPolicy::Disabled => true,
            AuthPolicy::BearerToken(expected) => extract_bearer_token(headers)
                .map(|token| token == expected)
                .unwrap_or(false),
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

pub async fn require_login(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.auth_policy.is_satisfied_by(request.headers()) {
        if state.auth_policy == AuthPolicy::Disabled {
            tracing::debug!("{} admitted without auth check", request.uri().path());
        }
        next.run(request).await
    } else {
        tracing::warn!("Rejected unauthenticated request to {}", request.uri().path());
        AppError::AuthenticationRequired.into_response()
    }
}
