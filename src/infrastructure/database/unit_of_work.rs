//! Transaction Context
//!
//! Groups several statements into one atomic unit. Used by repositories for
//! deletes that must remove dependent rows before their parent.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Transaction context that wraps a SQLx transaction.
///
/// Dropping the context without calling [`TransactionContext::commit`]
/// rolls the transaction back.
pub struct TransactionContext {
    tx: Transaction<'static, Postgres>,
}

impl TransactionContext {
    /// Begin a new transaction on the pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await.map_err(AppError::Database)?;
        Ok(Self { tx })
    }

    /// Connection to execute statements on inside the transaction.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(AppError::Database)
    }

    /// Rollback the transaction.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(AppError::Database)
    }
}
