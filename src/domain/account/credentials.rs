//! Password value objects.
//!
//! Plaintext passwords are held in [`secrecy::SecretString`] so they are
//! zeroized on drop and never show up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A non-empty plaintext password supplied by the caller.
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// Wraps a plaintext password, rejecting the empty string.
    pub fn new(secret: SecretString) -> Result<Self, ValidationError> {
        if secret.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(Self(secret))
    }

    /// Returns the plaintext. Only the hasher should call this.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// One-way salted digest of a password, safe to persist.
///
/// Stored as a PHC string (`$argon2id$v=19$...`), which carries its own
/// algorithm, cost parameters and salt.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wraps a digest loaded from the store or produced by the hasher.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_rejects_empty_secret() {
        let result = Password::new(SecretString::new(String::new()));
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("password"));
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new(SecretString::new("hunter2".to_string())).unwrap();
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains("hunter2"));
        assert_eq!(password.expose(), "hunter2");
    }

    #[test]
    fn digest_debug_is_redacted() {
        let digest = PasswordDigest::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA");
        assert_eq!(format!("{:?}", digest), "PasswordDigest([REDACTED])");
    }
}
