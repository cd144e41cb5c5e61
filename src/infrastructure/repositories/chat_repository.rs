//! Chat Repository Implementation
//!
//! PostgreSQL implementation of the ChatRepository trait. Every lookup is
//! scoped by owner so a chat is invisible through another user's routes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Chat, ChatRepository, ChatWithMessages, Message, NewChat};
use crate::infrastructure::database::TransactionContext;
use crate::infrastructure::metrics::timed_query;
use crate::shared::error::AppError;

const TABLE: &str = "chat";

/// One row of the chat/message LEFT JOIN. Message columns are null for a
/// chat without messages.
#[derive(Debug, sqlx::FromRow)]
struct ChatMessageRow {
    id: i64,
    title: Option<String>,
    created_at: DateTime<Utc>,
    user_id: i64,
    message_id: Option<i64>,
    question: Option<String>,
    answer: Option<String>,
}

impl ChatMessageRow {
    fn chat(&self) -> Chat {
        Chat {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            user_id: self.user_id,
        }
    }

    fn into_message(self) -> Option<Message> {
        match (self.message_id, self.question, self.answer) {
            (Some(id), Some(question), Some(answer)) => Some(Message {
                id,
                question,
                answer,
                chat_id: self.id,
            }),
            _ => None,
        }
    }
}

/// Fold joined rows into a chat and its messages.
fn assemble(rows: Vec<ChatMessageRow>) -> Option<ChatWithMessages> {
    let chat = rows.first()?.chat();
    let messages = rows
        .into_iter()
        .filter_map(ChatMessageRow::into_message)
        .collect();
    Some(ChatWithMessages::new(chat, messages))
}

/// PostgreSQL chat repository implementation.
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_with_messages(&self, chat_id: i64, user_id: i64) -> Result<u64, AppError> {
        let mut tx = TransactionContext::begin(&self.pool).await?;

        // Lock the chat row so no message can be inserted between the two deletes.
        let owned = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM chat WHERE id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(chat_id)
        .bind(user_id)
        .fetch_optional(tx.conn())
        .await?;

        if owned.is_none() {
            tx.rollback().await?;
            return Ok(0);
        }

        sqlx::query("DELETE FROM message WHERE chat_id = $1")
            .bind(chat_id)
            .execute(tx.conn())
            .await?;

        let result = sqlx::query("DELETE FROM chat WHERE id = $1 AND user_id = $2")
            .bind(chat_id)
            .bind(user_id)
            .execute(tx.conn())
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Chat>, AppError> {
        let chats = timed_query(
            "find_by_user",
            TABLE,
            sqlx::query_as::<_, Chat>(
                r#"
                SELECT id, title, created_at, user_id
                FROM chat
                WHERE user_id = $1
                ORDER BY id
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(chats)
    }

    async fn find_for_user(&self, chat_id: i64, user_id: i64) -> Result<Option<Chat>, AppError> {
        let chat = timed_query(
            "find_for_user",
            TABLE,
            sqlx::query_as::<_, Chat>(
                r#"
                SELECT id, title, created_at, user_id
                FROM chat
                WHERE id = $1 AND user_id = $2
                "#,
            )
            .bind(chat_id)
            .bind(user_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(chat)
    }

    async fn find_with_messages(
        &self,
        chat_id: i64,
        user_id: i64,
    ) -> Result<Option<ChatWithMessages>, AppError> {
        let rows = timed_query(
            "find_with_messages",
            TABLE,
            sqlx::query_as::<_, ChatMessageRow>(
                r#"
                SELECT c.id, c.title, c.created_at, c.user_id,
                       m.id AS message_id, m.question, m.answer
                FROM chat c
                LEFT JOIN message m ON m.chat_id = c.id
                WHERE c.id = $1 AND c.user_id = $2
                ORDER BY m.id
                "#,
            )
            .bind(chat_id)
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(assemble(rows))
    }

    async fn create(&self, chat: &NewChat) -> Result<Chat, AppError> {
        let created = timed_query(
            "create",
            TABLE,
            sqlx::query_as::<_, Chat>(
                r#"
                INSERT INTO chat (title, user_id)
                VALUES ($1, $2)
                RETURNING id, title, created_at, user_id
                "#,
            )
            .bind(&chat.title)
            .bind(chat.user_id)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(created)
    }

    async fn delete_for_user(&self, chat_id: i64, user_id: i64) -> Result<u64, AppError> {
        timed_query("delete_for_user", TABLE, self.delete_with_messages(chat_id, user_id)).await
    }
}
