pub mod test_helpers {
    use crate::{auth::AuthPolicy, AppState};
    use axum::Router;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use tempfile::NamedTempFile;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    /// Useful when you need to test features that don't work with in-memory databases
    pub async fn create_test_db_file() -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let database_url = format!("sqlite://{}", db_path);

        let pool = crate::db::create_pool(&database_url).await?;
        crate::db::init_schema(&pool).await?;

        Ok((pool, temp_file))
    }

    /// Insert a user row directly, bypassing validation
    pub async fn insert_test_user(
        pool: &SqlitePool,
        name: &str,
        email: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(r#"INSERT INTO "user" (name, email) VALUES (?, ?)"#)
            .bind(name)
            .bind(email)
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Build the full router over `pool`
    pub fn create_test_app(pool: SqlitePool, auth_policy: AuthPolicy) -> Router {
        crate::routes::app(AppState::new(pool, auth_policy))
    }
}

// Re-export commonly used test functions at module level for convenience
// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
