//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (signup, save tools) are kept apart from query
//! handlers (get tools). Login is a command because it issues a token.

mod deadline;
pub mod handlers;

pub use deadline::StoreDeadline;
pub use handlers::{
    // Account handlers
    LoginCommand, LoginHandler, LoginMode, LoginResult,
    SignupCommand, SignupHandler, SignupResult,
    // Tools handlers
    GetToolsHandler, GetToolsQuery,
    SaveToolsCommand, SaveToolsHandler, SaveToolsResult,
};
