//! Core error types for Tally.

use thiserror::Error;

/// Boxed error coming from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The scoped unit of work against storage failed.
    ///
    /// Covers connectivity, constraint violations and anything else the
    /// backend reports. Never retried.
    #[error("Storage operation failed: {0}")]
    Storage(#[source] BoxError),

    /// An action name that is not one of `increment`, `decrement`, `reset`.
    #[error("Unknown counter action: {0}")]
    InvalidAction(String),
}

impl CoreError {
    /// Wraps a backend error as a storage failure.
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }

    /// Returns true if this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
