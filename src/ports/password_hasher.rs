//! Password hasher port.
//!
//! Hashing is deliberately slow. Callers on an async runtime should run
//! [`PasswordHasher::hash`] and [`PasswordHasher::verify`] on the blocking
//! pool.

use thiserror::Error;

use crate::domain::account::{Password, PasswordDigest};

/// Failure to produce a digest.
#[derive(Debug, Clone, Error)]
pub enum HashingError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Failed to generate salt: {0}")]
    Salt(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),
}

/// One-way salted, adaptive password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Produce a fresh digest; two calls with the same password differ.
    fn hash(&self, password: &Password) -> Result<PasswordDigest, HashingError>;

    /// Check `password` against `digest` in constant time.
    ///
    /// Returns `false` on mismatch or if the digest cannot be parsed.
    fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool;
}
