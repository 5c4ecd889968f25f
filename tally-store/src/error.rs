//! Store error types.

use tally_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite error (connectivity, locking, constraint violation).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The counter would leave the `i64` range.
    #[error("Counter value {value} cannot be {action} without overflowing")]
    Overflow {
        /// Value before the operation.
        value: i64,
        /// What was attempted ("incremented", "decremented").
        action: &'static str,
    },

    /// A stored timestamp is outside the representable range.
    #[error("Invalid timestamp in storage: {0}")]
    InvalidTimestamp(i64),
}

impl StoreError {
    /// Returns true if SQLite reported the database as busy or locked.
    pub fn is_busy(&self) -> bool {
        match self {
            StoreError::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = StoreError::Overflow {
            value: i64::MAX,
            action: "incremented",
        };
        assert_eq!(
            err.to_string(),
            format!("Counter value {} cannot be incremented without overflowing", i64::MAX)
        );
    }

    #[test]
    fn test_busy_detection() {
        let busy = StoreError::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        ));
        assert!(busy.is_busy());
        assert!(!StoreError::Config("bad".into()).is_busy());
    }

    #[test]
    fn test_converts_into_core_storage_error() {
        let core: CoreError = StoreError::Config("missing path".into()).into();
        assert!(core.is_storage());
        assert!(core.to_string().contains("missing path"));
    }
}
