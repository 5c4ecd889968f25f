//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tally_core::{CounterAction, CounterRecord};

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for `show`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterOutput {
    pub value: i64,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl From<&CounterRecord> for CounterOutput {
    fn from(record: &CounterRecord) -> Self {
        Self {
            value: record.value,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// JSON output for increment / decrement / reset.
#[derive(Debug, Serialize)]
pub struct ActionOutput {
    pub action: CounterAction,
    pub value: i64,
}

fn serialize_datetime<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339())
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}
