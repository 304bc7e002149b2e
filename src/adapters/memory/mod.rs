//! In-memory adapters for testing and development.
//!
//! State lives in the process and is lost on restart. Not suitable for
//! multi-server deployments.

mod user_repository;
mod user_tools_repository;

pub use user_repository::InMemoryUserRepository;
pub use user_tools_repository::InMemoryUserToolsRepository;
