//! Access tokens issued on login.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Username;

const PLACEHOLDER_PREFIX: &str = "demo-token-";

/// Opaque token returned by a successful login.
///
/// SECURITY: the only issuer today is [`AccessToken::placeholder`], which
/// derives the token from the username. Anyone can forge it. Nothing may
/// use it for a trust decision until it is replaced by a signed session
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Deterministic, non-cryptographic token (`demo-token-<username>`).
    pub fn placeholder(username: &Username) -> Self {
        Self(format!("{}{}", PLACEHOLDER_PREFIX, username.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
