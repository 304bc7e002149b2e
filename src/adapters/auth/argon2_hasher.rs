//! Argon2id implementation of the PasswordHasher port.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::account::{Password, PasswordDigest};
use crate::ports::{HashingError, PasswordHasher};

const SALT_LEN: usize = 16;

/// Argon2id password hasher.
///
/// Digests are PHC strings that embed the cost parameters, so digests
/// produced under older settings keep verifying after the cost changes.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Creates a hasher with explicit cost parameters.
    ///
    /// - `memory_kib`: memory cost in KiB (at least 8 per lane)
    /// - `iterations`: number of passes (at least 1)
    /// - `parallelism`: number of lanes (at least 1)
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, HashingError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashingError::InvalidParams(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    fn generate_salt() -> Result<SaltString, HashingError> {
        let mut bytes = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| HashingError::Salt(e.to_string()))?;
        SaltString::encode_b64(&bytes).map_err(|e| HashingError::Salt(e.to_string()))
    }
}

impl Default for Argon2Hasher {
    /// OWASP-recommended Argon2id settings (19 MiB, 2 passes, 1 lane).
    fn default() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &Password) -> Result<PasswordDigest, HashingError> {
        let salt = Self::generate_salt()?;
        let hash = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|e| HashingError::Hash(e.to_string()))?;
        Ok(PasswordDigest::new(hash.to_string()))
    }

    fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool {
        match PasswordHash::new(digest.as_str()) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.expose().as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
