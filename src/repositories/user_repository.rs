use crate::models::user::User;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Carries the database's own constraint message.
    #[error("{0}")]
    AlreadyExists(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, name: &str, email: &str) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn classify(e: sqlx::Error) -> RepositoryError {
    let unique = e
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if unique {
        let message = e
            .as_database_error()
            .map(|db| db.message().to_string())
            .unwrap_or_else(|| e.to_string());
        RepositoryError::AlreadyExists(message)
    } else {
        RepositoryError::Database(e)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, name: &str, email: &str) -> RepositoryResult<User> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, User>(
            r#"INSERT INTO "user" (name, email) VALUES (?, ?) RETURNING id, name, email"#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(user) => {
                tx.commit().await?;
                Ok(user)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!("Rollback after failed insert failed: {}", rollback_err);
                }
                Err(classify(e))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT id, name, email FROM "user" WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT id, name, email FROM "user" ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}
