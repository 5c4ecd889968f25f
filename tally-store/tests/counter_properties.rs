//! Property tests: the store behaves like a plain `i64` under any sequence
//! of actions.

use proptest::prelude::*;
use tally_core::{CounterAction, CounterRepository};
use tally_store::{CounterStore, SqliteSessionFactory};
use tempfile::TempDir;

fn action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![
        Just(CounterAction::Increment),
        Just(CounterAction::Decrement),
        Just(CounterAction::Reset),
    ]
}

fn new_store() -> (TempDir, CounterStore) {
    let temp_dir = TempDir::new().unwrap();
    let sessions = SqliteSessionFactory::new(temp_dir.path().join("counter.db")).unwrap();
    (temp_dir, CounterStore::new(sessions))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn store_matches_model(actions in prop::collection::vec(action(), 0..24)) {
        let (_dir, store) = new_store();
        let mut model: i64 = 0;

        for action in actions {
            model = match action {
                CounterAction::Increment => model + 1,
                CounterAction::Decrement => model - 1,
                CounterAction::Reset => 0,
            };
            prop_assert_eq!(store.apply(action).unwrap(), model);
            prop_assert_eq!(store.record_count().unwrap(), 1);
        }

        prop_assert_eq!(store.get_current_value().unwrap(), model);
    }

    #[test]
    fn decrement_undoes_increment(prefix in prop::collection::vec(action(), 0..12)) {
        let (_dir, store) = new_store();
        for action in prefix {
            store.apply(action).unwrap();
        }

        let before = store.get_current_value().unwrap();
        store.increment().unwrap();
        prop_assert_eq!(store.decrement().unwrap(), before);
    }

    #[test]
    fn no_floor_or_ceiling(start in -50i64..50) {
        let (_dir, store) = new_store();
        for _ in 0..start.unsigned_abs() {
            if start < 0 {
                store.decrement().unwrap();
            } else {
                store.increment().unwrap();
            }
        }
        prop_assert_eq!(store.get_current_value().unwrap(), start);
        prop_assert_eq!(store.decrement().unwrap(), start - 1);
        prop_assert_eq!(store.increment().unwrap(), start);
        prop_assert_eq!(store.increment().unwrap(), start + 1);
    }
}
