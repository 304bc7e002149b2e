//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::account::{NewUser, PasswordDigest, User, UserCredentials, UserId, Username};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserCredentials {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|e| {
            DomainError::database("Database error", format!("Invalid stored username: {}", e))
        })?;

        Ok(UserCredentials {
            user: User {
                id: UserId::from_i32(row.id),
                username,
                created_at: Timestamp::from_datetime(row.created_at),
            },
            password_digest: PasswordDigest::new(row.password_hash),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find user", e))?;

        row.map(UserCredentials::try_from).transpose()
    }

    async fn exists(&self, username: &Username) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check user", e))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let row: (i32, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, created_at
            "#,
        )
        .bind(new_user.username.as_str())
        .bind(new_user.password_digest.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(User {
            id: UserId::from_i32(row.0),
            username: new_user.username.clone(),
            created_at: Timestamp::from_datetime(row.1),
        })
    }
}

fn map_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return DomainError::new(ErrorCode::Conflict, "Username already exists")
                .with_cause(db_err.message());
        }
    }
    DomainError::database("Failed to create user", e)
}
