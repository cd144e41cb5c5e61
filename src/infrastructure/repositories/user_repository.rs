//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewUser, User, UserRepository};
use crate::infrastructure::database::TransactionContext;
use crate::infrastructure::metrics::timed_query;
use crate::shared::error::AppError;

const TABLE: &str = "user";

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Removes the user's messages, then chats, then the user row in one
    /// transaction so no chat or message is left pointing at a missing owner.
    async fn delete_cascade(&self, id: i64) -> Result<u64, AppError> {
        let mut tx = TransactionContext::begin(&self.pool).await?;

        // Lock the user row so no chat can be inserted for it until commit.
        let exists =
            sqlx::query_scalar::<_, i64>(r#"SELECT id FROM "user" WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(tx.conn())
                .await?;

        if exists.is_none() {
            tx.rollback().await?;
            return Ok(0);
        }

        sqlx::query(
            r#"
            DELETE FROM message
            WHERE chat_id IN (SELECT id FROM chat WHERE user_id = $1)
            "#,
        )
        .bind(id)
        .execute(tx.conn())
        .await?;

        sqlx::query("DELETE FROM chat WHERE user_id = $1")
            .bind(id)
            .execute(tx.conn())
            .await?;

        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = $1"#)
            .bind(id)
            .execute(tx.conn())
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = timed_query(
            "find_all",
            TABLE,
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, first_name, last_name, age
                FROM "user"
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = timed_query(
            "find_by_id",
            TABLE,
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, first_name, last_name, age
                FROM "user"
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(user)
    }

    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let created = timed_query(
            "create",
            TABLE,
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO "user" (first_name, last_name, age)
                VALUES ($1, $2, $3)
                RETURNING id, first_name, last_name, age
                "#,
            )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        timed_query("delete", TABLE, self.delete_cascade(id)).await
    }
}
