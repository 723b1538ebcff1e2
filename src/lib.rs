pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub auth_policy: auth::AuthPolicy,
    pub pool: sqlx::SqlitePool,
}

impl AppState {
    /// Wire repositories and services over `pool`.
    pub fn new(pool: sqlx::SqlitePool, auth_policy: auth::AuthPolicy) -> Self {
        let user_repository = Arc::new(repositories::SqliteUserRepository::new(pool.clone()));
        let user_service = Arc::new(services::user_service::UserService::new(user_repository));

        Self {
            user_service,
            auth_policy,
            pool,
        }
    }
}
