//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod tools;

pub use account::{
    LoginCommand, LoginHandler, LoginMode, LoginResult, SignupCommand, SignupHandler,
    SignupResult,
};
pub use tools::{GetToolsHandler, GetToolsQuery, SaveToolsCommand, SaveToolsHandler, SaveToolsResult};

use crate::domain::foundation::{DomainError, ValidationError};

/// Maps a rejected input field to a `ValidationFailed` error.
///
/// A missing field reports `missing`; any other rule keeps its own message.
fn validation_failure(err: ValidationError, missing: &str) -> DomainError {
    match err {
        ValidationError::EmptyField { .. } => DomainError::from(err).with_message(missing),
        _ => DomainError::from(err),
    }
}
