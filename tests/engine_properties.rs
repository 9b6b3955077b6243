//! Behavioural properties of the public engine API.

use proptest::prelude::*;
use riftmatch::{DEFAULT_PRIORITY, Engine, MatchResult};
use std::sync::Arc;
use std::thread;

#[test]
fn equal_priorities_keep_first_inserted() {
    let engine = Engine::new();
    assert!(engine.add_pair("a", "A", 5, false));
    assert!(engine.add_pair("a", "B", 5, false));

    let res = engine.match_input("a");
    assert_eq!(res.output.as_deref(), Some("A"));
    assert_eq!(res.transform_id, 1);
}

#[test]
fn rejected_left_pattern_leaves_pair_count() {
    let engine = Engine::new();
    let before = engine.metrics().pair_count;
    assert!(!engine.add_pair("(unbalanced", "x", DEFAULT_PRIORITY, false));
    assert_eq!(engine.metrics().pair_count, before);
}

#[test]
fn invalid_right_pattern_is_stored_verbatim() {
    let engine = Engine::new();
    assert!(engine.add_pair("ok", "(unbalanced", DEFAULT_PRIORITY, false));
    assert_eq!(engine.match_input("ok").output.as_deref(), Some("(unbalanced"));
}

#[test]
fn anchored_round_trip() {
    let engine = Engine::new();
    engine.add_pair("^hello$", "HELLO", 1, false);

    let res = engine.match_input("hello");
    assert!(res.matched);
    assert_eq!(res.output.as_deref(), Some("HELLO"));
    assert_eq!(res.transform_id, 1);

    assert!(!engine.match_input("hello there").matched);
}

#[test]
fn positional_and_named_substitution() {
    let engine = Engine::new();
    engine.add_pair(r"(\w+)@(\w+)", "user=$1 host=$2", 1, false);
    engine.add_pair(r"(?P<user>\w+):(?P<pass>\w+)", "{user}/{pass}", 1, false);

    assert_eq!(engine.match_input("name@host").output.as_deref(), Some("user=name host=host"));
    assert_eq!(engine.match_input("bob:secret").output.as_deref(), Some("bob/secret"));
}

#[test]
fn failures_are_counted_and_averaged() {
    let engine = Engine::new();
    engine.add_pair("x", "X", 1, false);

    engine.match_input("x");
    let after_match = engine.metrics();

    let res = engine.match_input("nothing here");
    assert_eq!(res, MatchResult::no_match());

    let metrics = engine.metrics();
    assert_eq!(metrics.total_matches, 1);
    assert_eq!(metrics.total_failures, after_match.total_failures + 1);
    assert!(metrics.average_match_time_ms.is_finite());
    assert!(metrics.average_match_time_ms >= 0.0);
}

#[test]
fn metrics_serialize_with_field_names() {
    let engine = Engine::new();
    engine.add_pair("x", "X", 1, false);
    engine.match_input("x");

    let value = serde_json::to_value(engine.metrics()).unwrap();
    assert_eq!(value["total_matches"], 1);
    assert_eq!(value["total_failures"], 0);
    assert_eq!(value["pair_count"], 1);

    let value = serde_json::to_value(engine.match_input("x")).unwrap();
    assert_eq!(value["output"], "X");
    assert_eq!(value["transform_id"], 1);
}

#[test]
fn concurrent_adds_and_matches_stay_consistent() {
    const THREADS: usize = 8;
    const ADDS_PER_THREAD: usize = 50;

    let engine = Arc::new(Engine::new());

    let stored: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let engine = Arc::clone(&engine);
                scope.spawn(move || {
                    let mut stored = 0usize;
                    for i in 0..ADDS_PER_THREAD {
                        // every fifth left pattern is invalid
                        let left = if i % 5 == 4 { format!("(t{t}") } else { format!("^t{t}-{i}$") };
                        if engine.add_pair(&left, &format!("out-{t}-{i}"), i as i64, false) {
                            stored += 1;
                        }

                        let res = engine.match_input(&format!("t{t}-{i}"));
                        if i % 5 != 4 {
                            assert!(res.matched);
                            assert_eq!(res.output, Some(format!("out-{t}-{i}")));
                            assert!(res.transform_id >= 1);
                        } else {
                            assert!(!res.matched);
                        }
                    }
                    stored
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    let expected = THREADS * ADDS_PER_THREAD * 4 / 5;
    assert_eq!(stored, expected);
    let metrics = engine.metrics();
    assert_eq!(metrics.pair_count, expected);
    assert_eq!(metrics.total_matches + metrics.total_failures, (THREADS * ADDS_PER_THREAD) as u64);
    assert_eq!(metrics.total_matches, expected as u64);

    let mut ids: Vec<u64> = engine.pairs().iter().map(|p| p.transform_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=expected as u64).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn winner_has_smallest_priority_then_earliest_id(priorities in prop::collection::vec(-50i64..50, 1..40)) {
        let engine = Engine::new();
        for (i, p) in priorities.iter().enumerate() {
            let added = engine.add_pair("k", &format!("r{i}"), *p, false);
            prop_assert!(added);
        }

        let min = *priorities.iter().min().unwrap();
        let first = priorities.iter().position(|p| *p == min).unwrap();

        let res = engine.match_input("k");
        prop_assert!(res.matched);
        prop_assert_eq!(res.priority, min);
        prop_assert_eq!(res.transform_id, first as u64 + 1);
        let expected = format!("r{first}");
        prop_assert_eq!(res.output.as_deref(), Some(expected.as_str()));
    }
}
