//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresUserRepository` - Users with a unique username index
//! - `PostgresUserToolsRepository` - Per-user tool sets with transactional replace
//! - `connect` / `ensure_schema` - Pool construction and table bootstrap

mod pool;
mod schema;
mod user_repository;
mod user_tools_repository;

pub use pool::connect;
pub use schema::ensure_schema;
pub use user_repository::PostgresUserRepository;
pub use user_tools_repository::PostgresUserToolsRepository;
