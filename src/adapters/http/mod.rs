//! HTTP adapters - REST API implementations.
//!
//! Each application module has its own HTTP adapter for endpoint exposure;
//! [`api_router`] mounts them all under `/api`.

pub mod account;
pub mod error;
pub mod health;
pub mod router;
pub mod tools;

// Re-export key types for convenience
pub use account::{account_router, AccountAppState};
pub use error::{ApiError, FailureResponse};
pub use router::{api_router, cors_layer, with_middleware, AppState};
pub use tools::{tools_router, ToolsAppState};
