//! Bounded waiting on store calls.

use std::future::Future;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on how long a handler waits for a single store call.
///
/// When the bound elapses the pending future is dropped. For sqlx that
/// drops the connection or transaction, which rolls back any open
/// transaction.
#[derive(Debug, Clone, Copy)]
pub struct StoreDeadline {
    timeout: Duration,
}

impl StoreDeadline {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `call`, failing with `ErrorCode::Timeout` if it does not
    /// finish within the bound.
    pub async fn run<T, F>(&self, operation: &'static str, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::new(ErrorCode::Timeout, "Database error").with_cause(
                format!("{} timed out after {}ms", operation, self.timeout.as_millis()),
            )),
        }
    }
}

impl Default for StoreDeadline {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
