//! Trait definitions for Tally.
//!
//! The presentation layer only ever sees a [`CounterRepository`]; the SQLite
//! store in `tally-store` is one implementation, test doubles are others.

use crate::error::CoreError;
use crate::models::{CounterAction, CounterRecord};

/// Read-modify-write access to the single counter record.
///
/// Implementors are responsible for:
/// - Creating the record lazily on first access
/// - Running each operation as its own transactional unit of work
/// - Keeping at most one record in storage
///
/// Operations are synchronous; async callers should move them onto a
/// blocking thread.
pub trait CounterRepository: Send + Sync {
    /// Returns the record, creating it with value 0 if absent.
    fn get_or_create(&self) -> Result<CounterRecord, CoreError>;

    /// Adds one and returns the new value. An absent record becomes 1.
    fn increment(&self) -> Result<i64, CoreError>;

    /// Subtracts one and returns the new value. An absent record becomes -1.
    fn decrement(&self) -> Result<i64, CoreError>;

    /// Sets the value to zero and returns it.
    fn reset(&self) -> Result<i64, CoreError>;

    /// Returns the current value, creating the record if absent.
    fn get_current_value(&self) -> Result<i64, CoreError> {
        Ok(self.get_or_create()?.value)
    }

    /// Dispatches an action to the matching mutating operation.
    fn apply(&self, action: CounterAction) -> Result<i64, CoreError> {
        match action {
            CounterAction::Increment => self.increment(),
            CounterAction::Decrement => self.decrement(),
            CounterAction::Reset => self.reset(),
        }
    }
}
