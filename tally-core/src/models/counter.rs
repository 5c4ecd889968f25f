//! The persisted counter record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Counter Record
// ============================================================================

/// The sole persisted entity: one integer plus its timestamps.
///
/// Storage holds at most one of these, always under
/// [`CounterRecord::SINGLETON_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Current counter value. May be negative.
    pub value: i64,
    /// When the record was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the value was last changed.
    pub updated_at: DateTime<Utc>,
}

impl CounterRecord {
    /// The fixed key of the single counter row.
    pub const SINGLETON_ID: i64 = 1;

    /// Creates a fresh record holding `value`, stamped with `now`.
    pub fn new(value: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: Self::SINGLETON_ID,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if the record has been mutated since creation.
    pub fn was_modified(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Display text for the counter, as shown on the page.
    pub fn display_text(&self) -> String {
        self.value.to_string()
    }
}
