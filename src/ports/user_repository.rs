//! User repository port.
//!
//! Defines the contract for storing and looking up users.
//!
//! # Design
//!
//! - **Unique constraint**: usernames are unique; the store enforces it on insert
//! - **Insert-only**: users are never updated or deleted

use async_trait::async_trait;

use crate::domain::account::{NewUser, User, UserCredentials, Username};
use crate::domain::foundation::DomainError;

/// Repository port for user persistence.
///
/// Implementations must reject a second insert of the same username even
/// when both inserts race past an [`exists`](UserRepository::exists) check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user and the stored password digest by username.
    ///
    /// Returns `None` if no such user exists.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserCredentials>, DomainError>;

    /// Check whether a username is already taken.
    async fn exists(&self, username: &Username) -> Result<bool, DomainError>;

    /// Insert a new user; the store assigns id and creation time.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the username is already taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
