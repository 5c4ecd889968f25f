//! The counter store.
//!
//! Owns the single counter row. Each public operation is one scoped unit of
//! work: open a session, begin an `IMMEDIATE` transaction, read-modify-write
//! the row under [`CounterRecord::SINGLETON_ID`], commit. Dropping an
//! uncommitted transaction rolls it back, so every early return leaves
//! storage unchanged.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tally_core::{CoreError, CounterAction, CounterRecord, CounterRepository};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::schema;
use crate::session::{SessionFactory, SqliteSessionFactory};

// ============================================================================
// Stored Row
// ============================================================================

/// Raw row as stored; timestamps are microseconds since the epoch.
#[derive(Debug, Clone, Copy)]
struct StoredRow {
    value: i64,
    created_at: i64,
    updated_at: i64,
}

impl StoredRow {
    fn into_record(self) -> Result<CounterRecord, StoreError> {
        Ok(CounterRecord {
            id: CounterRecord::SINGLETON_ID,
            value: self.value,
            created_at: from_micros(self.created_at)?,
            updated_at: from_micros(self.updated_at)?,
        })
    }
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_micros(micros).ok_or(StoreError::InvalidTimestamp(micros))
}

fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

fn load(conn: &Connection) -> Result<Option<StoredRow>, StoreError> {
    let row = conn
        .query_row(
            "SELECT value, created_at, updated_at FROM counters WHERE id = ?1",
            [CounterRecord::SINGLETON_ID],
            |row| {
                Ok(StoredRow {
                    value: row.get(0)?,
                    created_at: row.get(1)?,
                    updated_at: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(row)
}

fn insert(conn: &Connection, value: i64, now: i64) -> Result<StoredRow, StoreError> {
    conn.execute(
        "INSERT INTO counters (id, value, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
        params![CounterRecord::SINGLETON_ID, value, now],
    )?;
    Ok(StoredRow {
        value,
        created_at: now,
        updated_at: now,
    })
}

fn update(conn: &Connection, value: i64, updated_at: i64) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE counters SET value = ?1, updated_at = ?2 WHERE id = ?3",
        params![value, updated_at, CounterRecord::SINGLETON_ID],
    )?;
    Ok(())
}

// ============================================================================
// Value Transitions
// ============================================================================

/// Value a freshly created record gets when `action` triggers the creation.
fn initial_value(action: CounterAction) -> i64 {
    match action {
        CounterAction::Increment => 1,
        CounterAction::Decrement => -1,
        CounterAction::Reset => 0,
    }
}

/// Value after applying `action` to an existing record.
fn next_value(action: CounterAction, current: i64) -> Result<i64, StoreError> {
    let next = match action {
        CounterAction::Increment => current.checked_add(1),
        CounterAction::Decrement => current.checked_sub(1),
        CounterAction::Reset => Some(0),
    };
    next.ok_or(StoreError::Overflow {
        value: current,
        action: action.past_tense(),
    })
}

/// Last-modified stamp for a mutation: strictly after the previous one even
/// if the clock has not moved.
fn next_timestamp(previous: i64, now: i64) -> i64 {
    now.max(previous.saturating_add(1))
}

// ============================================================================
// Counter Store
// ============================================================================

/// SQLite-backed store for the single counter record.
#[derive(Debug, Clone)]
pub struct CounterStore<F = SqliteSessionFactory> {
    sessions: F,
}

impl<F: SessionFactory> CounterStore<F> {
    /// Creates a store that opens its sessions through `sessions`.
    pub fn new(sessions: F) -> Self {
        Self { sessions }
    }

    /// Returns the session factory.
    pub fn sessions(&self) -> &F {
        &self.sessions
    }

    /// Returns the record, creating it with value 0 if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the unit of work fails.
    pub fn get_or_create(&self) -> Result<CounterRecord, StoreError> {
        self.unit_of_work("get_or_create", |conn| {
            let row = match load(conn)? {
                Some(row) => row,
                None => {
                    debug!("No counter found, creating one");
                    insert(conn, 0, now_micros())?
                }
            };
            row.into_record()
        })
    }

    /// Adds one. An absent record is created with value 1.
    ///
    /// # Errors
    ///
    /// Returns error if the unit of work fails or the value would overflow.
    pub fn increment(&self) -> Result<i64, StoreError> {
        self.mutate(CounterAction::Increment)
    }

    /// Subtracts one. An absent record is created with value -1.
    ///
    /// # Errors
    ///
    /// Returns error if the unit of work fails or the value would overflow.
    pub fn decrement(&self) -> Result<i64, StoreError> {
        self.mutate(CounterAction::Decrement)
    }

    /// Sets the value to zero. An absent record is created with value 0.
    ///
    /// # Errors
    ///
    /// Returns error if the unit of work fails.
    pub fn reset(&self) -> Result<i64, StoreError> {
        self.mutate(CounterAction::Reset)
    }

    /// Returns the current value, creating the record if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the unit of work fails.
    pub fn get_current_value(&self) -> Result<i64, StoreError> {
        Ok(self.get_or_create()?.value)
    }

    /// Returns the number of counter rows in storage (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub fn record_count(&self) -> Result<i64, StoreError> {
        let conn = self.sessions.open()?;
        schema::count_rows(&conn)
    }

    fn mutate(&self, action: CounterAction) -> Result<i64, StoreError> {
        self.unit_of_work(action.as_str(), |conn| {
            let now = now_micros();
            let value = match load(conn)? {
                None => insert(conn, initial_value(action), now)?.value,
                Some(row) => {
                    let value = next_value(action, row.value)?;
                    update(conn, value, next_timestamp(row.updated_at, now))?;
                    value
                }
            };
            debug!(action = %action, value, "Counter updated");
            Ok(value)
        })
    }

    /// Runs `op` inside one transaction and commits it.
    fn unit_of_work<T>(
        &self,
        name: &'static str,
        op: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let result = self.in_transaction(op);

        if let Err(e) = &result {
            if e.is_busy() {
                warn!(operation = name, error = %e, "Counter database is busy");
            } else {
                debug!(operation = name, error = %e, "Counter operation failed");
            }
        }
        result
    }

    fn in_transaction<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = self.sessions.open()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = op(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}

impl<F: SessionFactory> CounterRepository for CounterStore<F> {
    fn get_or_create(&self) -> Result<CounterRecord, CoreError> {
        Ok(CounterStore::get_or_create(self)?)
    }

    fn increment(&self) -> Result<i64, CoreError> {
        Ok(CounterStore::increment(self)?)
    }

    fn decrement(&self) -> Result<i64, CoreError> {
        Ok(CounterStore::decrement(self)?)
    }

    fn reset(&self) -> Result<i64, CoreError> {
        Ok(CounterStore::reset(self)?)
    }
}
