//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `postgres` - PostgreSQL repositories and schema bootstrap
//! - `memory` - In-process repositories for tests and store-less runs
//! - `auth` - Argon2id password hasher
//! - `http` - Axum routes, DTOs and error mapping

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
