//! SaveTools - Command handler replacing a user's tool set.

use std::sync::Arc;

use crate::application::handlers::validation_failure;
use crate::application::StoreDeadline;
use crate::domain::account::Username;
use crate::domain::foundation::DomainError;
use crate::domain::tools::ToolSet;
use crate::ports::UserToolsRepository;

/// Command to replace every tool saved under a username.
#[derive(Debug, Clone)]
pub struct SaveToolsCommand {
    pub username: String,
    /// Full new set. Repeated names are saved once; empty clears the set.
    pub tools: Vec<String>,
}

/// Result of a successful save: the de-duplicated set now stored.
#[derive(Debug, Clone)]
pub struct SaveToolsResult {
    pub username: Username,
    pub tools: ToolSet,
}

/// Handler for replacing tool sets.
pub struct SaveToolsHandler {
    tools: Arc<dyn UserToolsRepository>,
    deadline: StoreDeadline,
}

impl SaveToolsHandler {
    pub fn new(tools: Arc<dyn UserToolsRepository>, deadline: StoreDeadline) -> Self {
        Self { tools, deadline }
    }

    pub async fn handle(&self, cmd: SaveToolsCommand) -> Result<SaveToolsResult, DomainError> {
        // 1. Validate before touching the store
        let username = Username::new(cmd.username)
            .map_err(|e| validation_failure(e, "Username is required"))?;
        let tools = ToolSet::from_names(cmd.tools).map_err(DomainError::from)?;

        // 2. Replace atomically
        self.deadline
            .run("replace_tools", self.tools.replace(&username, &tools))
            .await
            .map_err(|e| e.with_message("Database error"))?;

        Ok(SaveToolsResult { username, tools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserToolsRepository;
    use crate::application::{GetToolsHandler, GetToolsQuery};
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records calls; fails every replace.
    struct FailingToolsRepository {
        replace_calls: Mutex<u32>,
    }

    #[async_trait]
    impl UserToolsRepository for FailingToolsRepository {
        async fn list(&self, _username: &Username) -> Result<ToolSet, DomainError> {
            Ok(ToolSet::empty())
        }

        async fn replace(&self, _username: &Username, _tools: &ToolSet) -> Result<(), DomainError> {
            *self.replace_calls.lock().unwrap() += 1;
            Err(DomainError::database(
                "Failed to insert tools",
                "deadlock detected",
            ))
        }
    }

    struct SlowToolsRepository;

    #[async_trait]
    impl UserToolsRepository for SlowToolsRepository {
        async fn list(&self, _username: &Username) -> Result<ToolSet, DomainError> {
            unimplemented!()
        }

        async fn replace(&self, _username: &Username, _tools: &ToolSet) -> Result<(), DomainError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    fn cmd(username: &str, tools: &[&str]) -> SaveToolsCommand {
        SaveToolsCommand {
            username: username.to_string(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn handlers() -> (SaveToolsHandler, GetToolsHandler) {
        let repo = Arc::new(InMemoryUserToolsRepository::new());
        (
            SaveToolsHandler::new(repo.clone(), StoreDeadline::default()),
            GetToolsHandler::new(repo, StoreDeadline::default()),
        )
    }

    async fn saved(get: &GetToolsHandler, username: &str) -> HashSet<String> {
        get.handle(GetToolsQuery {
            username: username.to_string(),
        })
        .await
        .unwrap()
        .into_strings()
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_save_then_get_returns_same_set() {
        let (save, get) = handlers();

        let result = save.handle(cmd("u", &["a", "b"])).await.unwrap();

        assert_eq!(result.tools.into_strings(), vec!["a", "b"]);
        let expected: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(saved(&get, "u").await, expected);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_set() {
        let (save, get) = handlers();

        save.handle(cmd("u", &["a", "b"])).await.unwrap();
        save.handle(cmd("u", &["c"])).await.unwrap();

        let expected: HashSet<String> = ["c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(saved(&get, "u").await, expected);
    }

    #[tokio::test]
    async fn test_save_empty_list_clears_tools() {
        let (save, get) = handlers();

        save.handle(cmd("u", &["a", "b"])).await.unwrap();
        let result = save.handle(cmd("u", &[])).await.unwrap();

        assert!(result.tools.is_empty());
        assert!(saved(&get, "u").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_deduplicates_input() {
        let (save, get) = handlers();

        let result = save.handle(cmd("u", &["a", "b", "a"])).await.unwrap();

        assert_eq!(result.tools.into_strings(), vec!["a", "b"]);
        assert_eq!(saved(&get, "u").await.len(), 2);
    }

    #[tokio::test]
    async fn test_save_for_unregistered_username_is_allowed() {
        let (save, get) = handlers();

        save.handle(cmd("ghost", &["a"])).await.unwrap();

        assert_eq!(saved(&get, "ghost").await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_empty_username() {
        let (save, _) = handlers();

        let err = save.handle(cmd("", &["a"])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Username is required");
    }

    #[tokio::test]
    async fn test_save_empty_tool_name_is_stored() {
        let (save, get) = handlers();

        let result = save.handle(cmd("u", &["", "a"])).await.unwrap();

        assert_eq!(result.tools.into_strings(), vec!["", "a"]);
        assert!(saved(&get, "u").await.contains(""));
    }

    #[tokio::test]
    async fn test_save_overlong_tool_name_rejected_before_store() {
        let repo = Arc::new(FailingToolsRepository {
            replace_calls: Mutex::new(0),
        });
        let save = SaveToolsHandler::new(repo.clone(), StoreDeadline::default());
        let long = "x".repeat(256);

        let err = save.handle(cmd("u", &["a", &long])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Field 'tools' exceeds 255 characters");
        assert_eq!(*repo.replace_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_store_failure_hides_cause() {
        let save = SaveToolsHandler::new(
            Arc::new(FailingToolsRepository {
                replace_calls: Mutex::new(0),
            }),
            StoreDeadline::default(),
        );

        let err = save.handle(cmd("u", &["a"])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.message(), "Database error");
        assert_eq!(err.cause(), Some("deadlock detected"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_store_timeout() {
        let save = SaveToolsHandler::new(
            Arc::new(SlowToolsRepository),
            StoreDeadline::new(Duration::from_millis(100)),
        );

        let err = save.handle(cmd("u", &["a"])).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::Timeout);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_leave_one_complete_set() {
        let (save, get) = handlers();
        let save = Arc::new(save);
        let set_a: HashSet<String> = ["a1", "a2", "a3"].iter().map(|s| s.to_string()).collect();
        let set_b: HashSet<String> = ["b1", "b2"].iter().map(|s| s.to_string()).collect();

        let tasks = (0..50).map(|i| {
            let save = save.clone();
            tokio::spawn(async move {
                let tools: &[&str] = if i % 2 == 0 {
                    &["a1", "a2", "a3"]
                } else {
                    &["b1", "b2"]
                };
                save.handle(cmd("u", tools)).await.unwrap();
            })
        });
        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        let final_set = saved(&get, "u").await;
        assert!(final_set == set_a || final_set == set_b, "mixed set: {:?}", final_set);
    }
}
