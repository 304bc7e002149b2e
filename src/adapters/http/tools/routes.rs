//! Axum router configuration for tools endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_tools, save_tools, ToolsAppState};

/// Create the tools API router.
///
/// # Routes
///
/// - `GET /user/tools?username=` - Read a user's tools
/// - `POST /user/tools` - Replace a user's tools
///
/// Suitable for mounting at `/api`.
pub fn tools_router() -> Router<ToolsAppState> {
    Router::new().route("/user/tools", get(get_tools).post(save_tools))
}
