//! PostgreSQL implementation of UserToolsRepository.
//!
//! A replace runs as one transaction: advisory lock on the username,
//! delete, bulk insert, commit. The lock serializes concurrent replaces
//! for the same user; without it two READ COMMITTED transactions can
//! each delete the old rows and both insert, leaving a mix of both sets.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::account::Username;
use crate::domain::foundation::DomainError;
use crate::domain::tools::ToolSet;
use crate::ports::UserToolsRepository;

/// PostgreSQL implementation of the UserToolsRepository port.
#[derive(Clone)]
pub struct PostgresUserToolsRepository {
    pool: PgPool,
}

impl PostgresUserToolsRepository {
    /// Creates a new PostgresUserToolsRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserToolsRepository for PostgresUserToolsRepository {
    async fn list(&self, username: &Username) -> Result<ToolSet, DomainError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT tool_name FROM user_tools WHERE username = $1 ORDER BY id",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list tools", e))?;

        Ok(ToolSet::from_stored(names))
    }

    async fn replace(&self, username: &Username, tools: &ToolSet) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database("Failed to begin transaction", e)
        })?;

        if let Err(err) = replace_in_transaction(&mut tx, username, tools).await {
            // A dropped transaction rolls back too; this keeps the rollback
            // error, if any, next to the original one.
            return Err(match tx.rollback().await {
                Ok(()) => err,
                Err(rollback_err) => {
                    let cause = format!(
                        "{}; rollback failed: {}",
                        err.cause().unwrap_or_default(),
                        rollback_err
                    );
                    err.with_cause(cause)
                }
            });
        }

        tx.commit().await.map_err(|e| {
            DomainError::database("Failed to commit transaction", e)
        })
    }
}

async fn replace_in_transaction(
    tx: &mut Transaction<'_, Postgres>,
    username: &Username,
    tools: &ToolSet,
) -> Result<(), DomainError> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(username.as_str())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to lock tools", e))?;

    sqlx::query("DELETE FROM user_tools WHERE username = $1")
        .bind(username.as_str())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to delete tools", e))?;

    if tools.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO user_tools (username, tool_name)
        SELECT $1, UNNEST($2::text[])
        "#,
    )
    .bind(username.as_str())
    .bind(tools.to_strings())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::database("Failed to insert tools", e))?;

    Ok(())
}
