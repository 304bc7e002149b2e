//! In-memory implementation of UserRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{NewUser, User, UserCredentials, UserId, Username};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::UserRepository;

/// In-memory user store keyed by username.
///
/// The write lock is held across the uniqueness check and the insert, so
/// concurrent signups for one username behave like the unique index does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    users: HashMap<String, UserCredentials>,
    last_id: i32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserCredentials>, DomainError> {
        Ok(self.state.read().await.users.get(username.as_str()).cloned())
    }

    async fn exists(&self, username: &Username) -> Result<bool, DomainError> {
        Ok(self.state.read().await.users.contains_key(username.as_str()))
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        if state.users.contains_key(new_user.username.as_str()) {
            return Err(DomainError::conflict("Username already exists"));
        }

        state.last_id += 1;
        let user = User {
            id: UserId::from_i32(state.last_id),
            username: new_user.username.clone(),
            created_at: Timestamp::now(),
        };
        state.users.insert(
            new_user.username.as_str().to_string(),
            UserCredentials {
                user: user.clone(),
                password_digest: new_user.password_digest.clone(),
            },
        );
        Ok(user)
    }
}
