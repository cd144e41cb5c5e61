//! User entity and repository trait.
//!
//! Maps to the `"user"` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A person who owns zero or more chats.
///
/// Maps to the `"user"` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: TEXT NOT NULL
/// - last_name: TEXT NOT NULL
/// - age: INTEGER NOT NULL CHECK (age >= 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// Fields required to insert a user; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Insert a new user and return the stored row.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Delete a user together with the chats and messages they own.
    ///
    /// Returns the number of user rows removed (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
