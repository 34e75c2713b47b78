use paramsync_core::{LatestCell, SetStateLatch};
use std::sync::Arc;

// ── SetStateLatch ────────────────────────────────────────────────

#[test]
fn latch_starts_unset() {
    assert!(!SetStateLatch::new().is_set());
    assert!(!SetStateLatch::default().is_set());
}

#[test]
fn only_first_trip_reports_the_transition() {
    let latch = SetStateLatch::new();
    assert!(latch.trip());
    assert!(!latch.trip());
    assert!(latch.is_set());
}

// ── LatestCell ───────────────────────────────────────────────────

type Greeter = dyn Fn(&str) -> String + Send + Sync;

#[test]
fn cell_calls_whatever_was_stored_last() {
    let cell: LatestCell<Greeter> = LatestCell::new(Arc::new(|name: &str| format!("hi {name}")));
    assert_eq!(cell.load()("ann"), "hi ann");

    cell.store(Arc::new(|name: &str| format!("bye {name}")));
    assert_eq!(cell.load()("ann"), "bye ann");
}

#[test]
fn loaded_value_outlives_a_later_store() {
    let cell: LatestCell<[String]> = LatestCell::new(Arc::from(vec!["a".to_string()]));
    let before = cell.load();
    cell.store(Arc::from(vec!["b".to_string()]));

    assert_eq!(&*before, ["a".to_string()]);
    assert_eq!(&*cell.load(), ["b".to_string()]);
}
