//! Message entity and repository trait.
//!
//! Maps to the `message` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A question/answer pair recorded in a chat.
///
/// Maps to the `message` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - question: TEXT NOT NULL
/// - answer: TEXT NOT NULL
/// - chat_id: BIGINT NOT NULL REFERENCES chat(id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub chat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub question: String,
    pub answer: String,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// All messages of a chat in insertion order.
    async fn find_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, AppError>;

    /// A message, only if it belongs to the given chat.
    async fn find_in_chat(&self, message_id: i64, chat_id: i64) -> Result<Option<Message>, AppError>;

    /// Insert a new message and return the stored row.
    async fn create(&self, message: &NewMessage) -> Result<Message, AppError>;

    /// Delete a message of the given chat. Returns rows affected (0 or 1).
    async fn delete_in_chat(&self, message_id: i64, chat_id: i64) -> Result<u64, AppError>;
}
