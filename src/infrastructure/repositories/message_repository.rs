//! Message Repository Implementation
//!
//! PostgreSQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Message, MessageRepository, NewMessage};
use crate::infrastructure::metrics::timed_query;
use crate::shared::error::AppError;

const TABLE: &str = "message";

/// PostgreSQL message repository implementation.
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, AppError> {
        let messages = timed_query(
            "find_by_chat",
            TABLE,
            sqlx::query_as::<_, Message>(
                r#"
                SELECT id, question, answer, chat_id
                FROM message
                WHERE chat_id = $1
                ORDER BY id
                "#,
            )
            .bind(chat_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(messages)
    }

    async fn find_in_chat(&self, message_id: i64, chat_id: i64) -> Result<Option<Message>, AppError> {
        let message = timed_query(
            "find_in_chat",
            TABLE,
            sqlx::query_as::<_, Message>(
                r#"
                SELECT id, question, answer, chat_id
                FROM message
                WHERE id = $1 AND chat_id = $2
                "#,
            )
            .bind(message_id)
            .bind(chat_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(message)
    }

    async fn create(&self, message: &NewMessage) -> Result<Message, AppError> {
        let created = timed_query(
            "create",
            TABLE,
            sqlx::query_as::<_, Message>(
                r#"
                INSERT INTO message (question, answer, chat_id)
                VALUES ($1, $2, $3)
                RETURNING id, question, answer, chat_id
                "#,
            )
            .bind(&message.question)
            .bind(&message.answer)
            .bind(message.chat_id)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(created)
    }

    async fn delete_in_chat(&self, message_id: i64, chat_id: i64) -> Result<u64, AppError> {
        let result = timed_query(
            "delete_in_chat",
            TABLE,
            sqlx::query("DELETE FROM message WHERE id = $1 AND chat_id = $2")
                .bind(message_id)
                .bind(chat_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected())
    }
}
