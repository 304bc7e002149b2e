//! GetTools - Query handler for a user's saved tools.

use std::sync::Arc;

use crate::application::handlers::validation_failure;
use crate::application::StoreDeadline;
use crate::domain::account::Username;
use crate::domain::foundation::DomainError;
use crate::domain::tools::ToolSet;
use crate::ports::UserToolsRepository;

/// Query for the tools saved under a username.
#[derive(Debug, Clone)]
pub struct GetToolsQuery {
    pub username: String,
}

/// Handler for reading tool sets.
///
/// Does not check that the username belongs to a registered user.
pub struct GetToolsHandler {
    tools: Arc<dyn UserToolsRepository>,
    deadline: StoreDeadline,
}

impl GetToolsHandler {
    pub fn new(tools: Arc<dyn UserToolsRepository>, deadline: StoreDeadline) -> Self {
        Self { tools, deadline }
    }

    /// Returns the saved set, empty when nothing was saved.
    pub async fn handle(&self, query: GetToolsQuery) -> Result<ToolSet, DomainError> {
        let username = Username::new(query.username)
            .map_err(|e| validation_failure(e, "Username is required"))?;

        self.deadline
            .run("list_tools", self.tools.list(&username))
            .await
            .map_err(|e| e.with_message("Database error"))
    }
}
