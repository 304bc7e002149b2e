//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamp, errors)
//! - `account` - User identity, credentials and access tokens
//! - `tools` - Per-user tool sets with replace-all semantics

pub mod account;
pub mod foundation;
pub mod tools;
