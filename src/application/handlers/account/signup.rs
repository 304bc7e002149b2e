//! Signup - Command handler for creating user accounts.

use std::sync::Arc;

use secrecy::SecretString;

use super::hash_on_blocking_pool;
use crate::application::handlers::validation_failure;
use crate::application::StoreDeadline;
use crate::domain::account::{NewUser, Password, User, Username};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PasswordHasher, UserRepository};

const REQUIRED_MESSAGE: &str = "Username and password are required";
const DUPLICATE_MESSAGE: &str = "Username already exists";

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub username: String,
    pub password: SecretString,
}

/// Result of successful signup. Never carries the password digest.
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user: User,
}

/// Handler for creating accounts.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    deadline: StoreDeadline,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        deadline: StoreDeadline,
    ) -> Self {
        Self {
            users,
            hasher,
            deadline,
        }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<SignupResult, DomainError> {
        // 1. Both fields are required
        let (username, password) = match (Username::new(cmd.username), Password::new(cmd.password))
        {
            (Ok(username), Ok(password)) => (username, password),
            (Err(e), _) | (_, Err(e)) => return Err(validation_failure(e, REQUIRED_MESSAGE)),
        };

        // 2. Reject taken usernames before paying for a hash
        let exists = self
            .deadline
            .run("user_exists", self.users.exists(&username))
            .await
            .map_err(|e| e.with_message("Database error"))?;
        if exists {
            return Err(DomainError::conflict(DUPLICATE_MESSAGE));
        }

        // 3. Hash
        let password_digest = hash_on_blocking_pool(self.hasher.clone(), password)
            .await?
            .map_err(|e| {
                DomainError::new(ErrorCode::HashingError, "Error processing password").with_cause(e)
            })?;

        // 4. Insert; the unique index catches a signup that raced past step 2
        let new_user = NewUser {
            username,
            password_digest,
        };
        let user = self
            .deadline
            .run("create_user", self.users.create(&new_user))
            .await
            .map_err(|e| match e.code() {
                ErrorCode::Conflict => DomainError::conflict(DUPLICATE_MESSAGE),
                _ => e.with_message("Error creating user"),
            })?;

        Ok(SignupResult { user })
    }
}
