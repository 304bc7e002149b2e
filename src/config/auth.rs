//! Password hashing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on hashing memory (1 GiB).
const MAX_MEMORY_KIB: u32 = 1024 * 1024;

/// Argon2id cost parameters
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Memory cost in KiB
    #[serde(default = "default_hash_memory_kib")]
    pub hash_memory_kib: u32,

    /// Number of passes over memory
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,

    /// Degree of parallelism (lanes)
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl AuthConfig {
    /// Validate hashing parameters
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hash_iterations == 0 {
            return Err(ValidationError::InvalidHashParams("iterations must be at least 1"));
        }
        if self.hash_parallelism == 0 {
            return Err(ValidationError::InvalidHashParams("parallelism must be at least 1"));
        }
        if self.hash_memory_kib < 8 * self.hash_parallelism {
            return Err(ValidationError::InvalidHashParams(
                "memory must be at least 8 KiB per lane",
            ));
        }
        if self.hash_memory_kib > MAX_MEMORY_KIB {
            return Err(ValidationError::InvalidHashParams("memory exceeds 1 GiB"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: default_hash_memory_kib(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_hash_memory_kib() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
