//! User Service
//!
//! Handles listing, creating and deleting users.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Get a user by ID
    async fn get_user(&self, user_id: i64) -> Result<User, UserError>;

    /// Create a user
    async fn create_user(&self, request: CreateUserDto) -> Result<User, UserError>;

    /// Delete a user together with their chats and messages
    async fn delete_user(&self, user_id: i64) -> Result<(), UserError>;
}

/// Create user request
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::Repository(e) => e,
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repo.find_all().await?)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, UserError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn create_user(&self, request: CreateUserDto) -> Result<User, UserError> {
        let user = self
            .user_repo
            .create(&NewUser {
                first_name: request.first_name,
                last_name: request.last_name,
                age: request.age,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), UserError> {
        let deleted = self.user_repo.delete(user_id).await?;
        if deleted == 0 {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id, "User deleted with owned chats");
        Ok(())
    }
}
