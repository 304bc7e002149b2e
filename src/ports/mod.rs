//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Point lookup, existence check and unique insert of users
//! - `UserToolsRepository` - Read and atomically replace a user's tool set
//!
//! ## Security Ports
//!
//! - `PasswordHasher` - One-way adaptive password hashing and verification

mod password_hasher;
mod user_repository;
mod user_tools_repository;

pub use password_hasher::{HashingError, PasswordHasher};
pub use user_repository::UserRepository;
pub use user_tools_repository::UserToolsRepository;
