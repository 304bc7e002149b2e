//! Account application handlers.
//!
//! Command handlers for signup and login.

mod login;
mod signup;

pub use login::{LoginCommand, LoginHandler, LoginMode, LoginResult};
pub use signup::{SignupCommand, SignupHandler, SignupResult};

use std::sync::Arc;

use crate::domain::account::{Password, PasswordDigest};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{HashingError, PasswordHasher};

/// Runs the hasher on the blocking pool.
async fn hash_on_blocking_pool(
    hasher: Arc<dyn PasswordHasher>,
    password: Password,
) -> Result<Result<PasswordDigest, HashingError>, DomainError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| DomainError::new(ErrorCode::InternalError, "Internal error").with_cause(e))
}

/// Runs verification on the blocking pool.
async fn verify_on_blocking_pool(
    hasher: Arc<dyn PasswordHasher>,
    password: Password,
    digest: PasswordDigest,
) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
        .await
        .map_err(|e| DomainError::new(ErrorCode::InternalError, "Internal error").with_cause(e))
}
