//! Tools application handlers.
//!
//! Query handler for reading a user's tool set and command handler for
//! replacing it.

mod get_tools;
mod save_tools;

pub use get_tools::{GetToolsHandler, GetToolsQuery};
pub use save_tools::{SaveToolsCommand, SaveToolsHandler, SaveToolsResult};
