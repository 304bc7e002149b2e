//! In-memory implementation of UserToolsRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::Username;
use crate::domain::foundation::DomainError;
use crate::domain::tools::ToolSet;
use crate::ports::UserToolsRepository;

/// In-memory tool sets keyed by username.
///
/// A replace swaps the whole set under the write lock, so readers see
/// either the old set or the new one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserToolsRepository {
    tools: Arc<RwLock<HashMap<String, ToolSet>>>,
}

impl InMemoryUserToolsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserToolsRepository for InMemoryUserToolsRepository {
    async fn list(&self, username: &Username) -> Result<ToolSet, DomainError> {
        Ok(self
            .tools
            .read()
            .await
            .get(username.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn replace(&self, username: &Username, tools: &ToolSet) -> Result<(), DomainError> {
        let mut all = self.tools.write().await;
        if tools.is_empty() {
            all.remove(username.as_str());
        } else {
            all.insert(username.as_str().to_string(), tools.clone());
        }
        Ok(())
    }
}
