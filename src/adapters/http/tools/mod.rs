//! Tools HTTP adapter - REST API for per-user tool lists.
//!
//! Provides endpoints for:
//! - Reading the tools saved under a username
//! - Replacing the whole saved set

pub mod dto;
pub mod handlers;
pub mod routes;

// Export DTOs for external use
pub use dto::*;

// Export handlers state and router
pub use handlers::ToolsAppState;
pub use routes::tools_router;
