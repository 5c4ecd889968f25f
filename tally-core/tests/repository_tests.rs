//! Integration tests for the default methods of `CounterRepository`.

use chrono::Utc;
use std::sync::Mutex;
use tally_core::{CoreError, CounterAction, CounterRecord, CounterRepository};

/// Minimal in-memory repository used to exercise the trait defaults.
#[derive(Default)]
struct MemoryRepository {
    record: Mutex<Option<CounterRecord>>,
}

impl MemoryRepository {
    fn mutate(&self, f: impl FnOnce(Option<i64>) -> i64) -> Result<i64, CoreError> {
        let mut slot = self.record.lock().unwrap();
        let now = Utc::now();
        let value = f(slot.as_ref().map(|r| r.value));
        match slot.as_mut() {
            Some(record) => {
                record.value = value;
                record.updated_at = now;
            }
            None => *slot = Some(CounterRecord::new(value, now)),
        }
        Ok(value)
    }
}

impl CounterRepository for MemoryRepository {
    fn get_or_create(&self) -> Result<CounterRecord, CoreError> {
        let mut slot = self.record.lock().unwrap();
        Ok(slot.get_or_insert_with(|| CounterRecord::new(0, Utc::now())).clone())
    }

    fn increment(&self) -> Result<i64, CoreError> {
        self.mutate(|v| v.map_or(1, |v| v + 1))
    }

    fn decrement(&self) -> Result<i64, CoreError> {
        self.mutate(|v| v.map_or(-1, |v| v - 1))
    }

    fn reset(&self) -> Result<i64, CoreError> {
        self.mutate(|_| 0)
    }
}

/// Repository whose every operation fails.
struct BrokenRepository;

impl CounterRepository for BrokenRepository {
    fn get_or_create(&self) -> Result<CounterRecord, CoreError> {
        Err(CoreError::storage("database is locked"))
    }

    fn increment(&self) -> Result<i64, CoreError> {
        Err(CoreError::storage("database is locked"))
    }

    fn decrement(&self) -> Result<i64, CoreError> {
        Err(CoreError::storage("database is locked"))
    }

    fn reset(&self) -> Result<i64, CoreError> {
        Err(CoreError::storage("database is locked"))
    }
}

#[test]
fn test_current_value_on_empty_repository_is_zero() {
    let repo = MemoryRepository::default();
    assert_eq!(repo.get_current_value().unwrap(), 0);
}

#[test]
fn test_apply_dispatches_each_action() {
    let repo = MemoryRepository::default();
    assert_eq!(repo.apply(CounterAction::Increment).unwrap(), 1);
    assert_eq!(repo.apply(CounterAction::Increment).unwrap(), 2);
    assert_eq!(repo.apply(CounterAction::Decrement).unwrap(), 1);
    assert_eq!(repo.apply(CounterAction::Reset).unwrap(), 0);
    assert_eq!(repo.apply(CounterAction::Decrement).unwrap(), -1);
    assert_eq!(repo.get_current_value().unwrap(), -1);
}

#[test]
fn test_repository_is_object_safe() {
    let repo: Box<dyn CounterRepository> = Box::new(MemoryRepository::default());
    assert_eq!(repo.apply(CounterAction::Increment).unwrap(), 1);
}

#[test]
fn test_defaults_propagate_errors() {
    let repo = BrokenRepository;
    let err = repo.get_current_value().unwrap_err();
    assert!(err.is_storage());
    assert!(repo.apply(CounterAction::Reset).unwrap_err().is_storage());
}
