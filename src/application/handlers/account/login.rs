//! Login - Command handler for authenticating users and issuing tokens.
//!
//! # Legacy mode
//!
//! A login with no password (absent or empty) succeeds for any non-empty
//! username without even checking that the user exists. Older clients
//! depend on it. It is a security gap: callers can obtain a token for
//! any username. The result reports [`LoginMode::Legacy`] so the
//! boundary can log every use of it.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use super::verify_on_blocking_pool;
use crate::application::handlers::validation_failure;
use crate::application::StoreDeadline;
use crate::domain::account::{AccessToken, Password, UserId, Username};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PasswordHasher, UserRepository};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    /// `None` or empty selects the legacy no-password mode.
    pub password: Option<SecretString>,
}

/// How a successful login was authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    /// Password verified against the stored digest.
    Password,
    /// No password supplied; nothing was verified.
    Legacy,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub username: Username,
    /// Set only when the user was looked up (password mode).
    pub user_id: Option<UserId>,
    pub token: AccessToken,
    pub mode: LoginMode,
}

/// Handler for logins.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    deadline: StoreDeadline,
}

impl LoginHandler {
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

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        // 1. Username is always required
        let username = Username::new(cmd.username)
            .map_err(|e| validation_failure(e, "Username is required"))?;

        // 2. Legacy mode: no password, no checks
        let password = match cmd.password.filter(|p| !p.expose_secret().is_empty()) {
            Some(secret) => Password::new(secret)?,
            None => {
                return Ok(LoginResult {
                    token: AccessToken::placeholder(&username),
                    username,
                    user_id: None,
                    mode: LoginMode::Legacy,
                })
            }
        };

        // 3. Look up; unknown user and wrong password look the same
        let credentials = self
            .deadline
            .run("find_user", self.users.find_by_username(&username))
            .await
            .map_err(|e| e.with_message("Database error"))?
            .ok_or_else(invalid_credentials)?;

        // 4. Verify
        let verified = verify_on_blocking_pool(
            self.hasher.clone(),
            password,
            credentials.password_digest,
        )
        .await?;
        if !verified {
            return Err(invalid_credentials());
        }

        // 5. Issue token
        Ok(LoginResult {
            token: AccessToken::placeholder(&username),
            username,
            user_id: Some(credentials.user.id),
            mode: LoginMode::Password,
        })
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::Unauthorized, INVALID_CREDENTIALS)
}
