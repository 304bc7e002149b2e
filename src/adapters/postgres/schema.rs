//! Idempotent table bootstrap.
//!
//! `user_tools.username` deliberately has no foreign key to `users`.

use sqlx::PgPool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR(255) UNIQUE NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_USER_TOOLS: &str = r#"
CREATE TABLE IF NOT EXISTS user_tools (
    id SERIAL PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    tool_name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (username, tool_name)
)
"#;

/// Creates the `users` and `user_tools` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_USER_TOOLS).execute(pool).await?;
    Ok(())
}
