//! User tools repository port.
//!
//! Tool rows are keyed by username only. There is no foreign key to
//! users, so tools may be stored for a username that was never registered.

use async_trait::async_trait;

use crate::domain::account::Username;
use crate::domain::foundation::DomainError;
use crate::domain::tools::ToolSet;

/// Repository port for per-user tool sets.
#[async_trait]
pub trait UserToolsRepository: Send + Sync {
    /// All tool names saved for `username`, in insertion order.
    ///
    /// Returns an empty set when nothing was saved.
    async fn list(&self, username: &Username) -> Result<ToolSet, DomainError>;

    /// Replace the whole tool set of `username` with `tools`.
    ///
    /// Must be atomic: either every previous entry is removed and every
    /// new one inserted, or nothing changes. Concurrent replaces for the
    /// same user must leave exactly one of the submitted sets.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (after rollback)
    async fn replace(&self, username: &Username, tools: &ToolSet) -> Result<(), DomainError>;
}
