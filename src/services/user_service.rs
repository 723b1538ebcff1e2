use crate::models::user::User;
use crate::repositories::user_repository::{RepositoryError, UserRepository};
use crate::validation::{validate_user_data, ValidationError};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Missing required fields")]
    MissingFields,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Duplicate email; holds the storage layer's message verbatim.
    #[error("{0}")]
    EmailTaken(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(RepositoryError),
}

impl From<RepositoryError> for UserServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(msg) => UserServiceError::EmailTaken(msg),
            other => UserServiceError::RepositoryError(other),
        }
    }
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create a user from an untyped JSON payload.
    ///
    /// The payload must be an object holding both a `name` and an `email`
    /// key before validation runs at all.
    pub async fn create_user(&self, payload: &Value) -> Result<User, UserServiceError> {
        let record = match payload {
            Value::Object(map) if map.contains_key("name") && map.contains_key("email") => map,
            _ => return Err(UserServiceError::MissingFields),
        };

        let new_user = validate_user_data(record).inspect_err(|e| {
            tracing::warn!("Rejected user payload: {}", e);
        })?;

        match self
            .repository
            .create_user(&new_user.name, &new_user.email)
            .await
        {
            Ok(user) => {
                tracing::info!("Created user {} (id {})", user.email, user.id);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Failed to create user {}: {}", new_user.email, e);
                Err(e.into())
            }
        }
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<User, UserServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::UserNotFound)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        let users = self.repository.list_users().await?;
        tracing::debug!("Listed {} users", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;
    use mockall::predicate::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };

        let user_clone = user.clone();
        mock_repo
            .expect_create_user()
            .with(eq("Test User"), eq("test@example.com"))
            .times(1)
            .returning(move |_, _| {
                let user = user_clone.clone();
                Box::pin(async move { Ok(user) })
            });

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(&json!({"name": "Test User", "email": "test@example.com"}))
            .await;
        let created = result.expect("Expected Ok result");
        assert_eq!(created, user);
    }

    #[tokio::test]
    async fn test_create_user_missing_fields() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(mock_repo));

        for payload in [
            json!({"name": "Only Name"}),
            json!({"email": "only@example.com"}),
            json!({}),
            json!(null),
            json!(["name", "email"]),
            json!("name"),
        ] {
            let result = service.create_user(&payload).await;
            assert!(
                matches!(result, Err(UserServiceError::MissingFields)),
                "payload {} should be missing fields",
                payload
            );
        }
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_skips_repository() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(&json!({"name": "Test", "email": "invalid-email"}))
            .await;
        assert!(matches!(
            result,
            Err(UserServiceError::Validation(ValidationError::InvalidEmail))
        ));
    }

    #[tokio::test]
    async fn test_create_user_empty_name() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(&json!({"name": "", "email": "test@example.com"}))
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Name cannot be empty");
    }

    #[tokio::test]
    async fn test_create_user_email_taken() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create_user().times(1).returning(|_, _| {
            Box::pin(async move {
                Err(RepositoryError::AlreadyExists(
                    "UNIQUE constraint failed: user.email".to_string(),
                ))
            })
        });

        let service = UserService::new(Arc::new(mock_repo));
        let result = service
            .create_user(&json!({"name": "Dup", "email": "dup@example.com"}))
            .await;

        match result {
            Err(UserServiceError::EmailTaken(msg)) => {
                assert_eq!(msg, "UNIQUE constraint failed: user.email")
            }
            other => panic!("expected EmailTaken, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_find_user_by_id_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));

        let service = UserService::new(Arc::new(mock_repo));
        let result = service.find_user_by_id(42).await;
        assert!(matches!(result, Err(UserServiceError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_list_users_passes_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_list_users().times(1).returning(|| {
            Box::pin(async move {
                Ok(vec![User {
                    id: 1,
                    name: "A".to_string(),
                    email: "a@example.com".to_string(),
                }])
            })
        });

        let service = UserService::new(Arc::new(mock_repo));
        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "a@example.com");
    }
}
