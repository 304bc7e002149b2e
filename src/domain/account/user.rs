//! User entity.

use serde::{Deserialize, Serialize};

use super::{PasswordDigest, UserId, Username};
use crate::domain::foundation::Timestamp;

/// A registered user as seen from outside the store.
///
/// Carries no credential material, so it is safe to serialize into
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub created_at: Timestamp,
}

/// A user together with the stored password digest.
///
/// Only returned by credential lookups during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_digest: PasswordDigest,
}

/// Data needed to insert a new user. The store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_digest: PasswordDigest,
}
