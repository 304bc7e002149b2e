//! Authentication adapters.
//!
//! Implementations of the `PasswordHasher` port:
//!
//! - `argon2_hasher` - Argon2id with PHC string digests

mod argon2_hasher;

pub use argon2_hasher::Argon2Hasher;
