//! Chat entity and repository trait.
//!
//! Maps to the `chat` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::shared::error::AppError;

/// A conversation owned by exactly one user.
///
/// Maps to the `chat` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW() (never updated)
/// - user_id: BIGINT NOT NULL REFERENCES "user"(id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: i64,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Fields required to insert a chat. The creation time is set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub user_id: i64,
    pub title: Option<String>,
}

/// A chat with its messages loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatWithMessages {
    #[serde(flatten)]
    pub chat: Chat,
    pub messages: Vec<Message>,
}

impl ChatWithMessages {
    pub fn new(chat: Chat, messages: Vec<Message>) -> Self {
        Self { chat, messages }
    }
}

/// Repository trait for Chat data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// All chats owned by a user.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Chat>, AppError>;

    /// A chat, only if it is owned by the given user.
    async fn find_for_user(&self, chat_id: i64, user_id: i64) -> Result<Option<Chat>, AppError>;

    /// A user's chat with its messages eagerly loaded.
    async fn find_with_messages(
        &self,
        chat_id: i64,
        user_id: i64,
    ) -> Result<Option<ChatWithMessages>, AppError>;

    /// Insert a new chat and return the stored row.
    async fn create(&self, chat: &NewChat) -> Result<Chat, AppError>;

    /// Delete a user's chat and all of its messages atomically.
    ///
    /// Returns the number of chat rows removed (0 or 1).
    async fn delete_for_user(&self, chat_id: i64, user_id: i64) -> Result<u64, AppError>;
}
