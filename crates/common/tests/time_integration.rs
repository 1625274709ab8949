//! Integration tests for the `time` module.
//!
//! These tests cover the clock abstraction, the mock clock shared between
//! owners, and relative-time phrasing driven by clock deltas.

#![cfg(feature = "test-utils")]

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use datewise_common::testing::MockClock;
use datewise_common::time::{format_relative, Clock, SystemClock};

fn phrase_since(clock: &dyn Clock, then: DateTime<Utc>) -> String {
    format_relative(then - clock.now())
}

/// Verifies that a cloned mock clock advances for every owner.
#[test]
fn test_mock_clock_clones_share_time() {
    let start = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let clock = MockClock::at(start);
    let shared: Arc<dyn Clock> = Arc::new(clock.clone());

    clock.advance(TimeDelta::minutes(90));
    assert_eq!(shared.now(), start + TimeDelta::minutes(90));
    assert_eq!(shared.millis_since_epoch(), (start + TimeDelta::minutes(90)).timestamp_millis());

    clock.set(start);
    assert_eq!(shared.now(), start);
}

/// Verifies relative phrasing as a pinned clock moves past an instant.
#[test]
fn test_relative_phrases_follow_clock() {
    let meeting = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let clock = MockClock::at(meeting - TimeDelta::hours(3));

    assert_eq!(phrase_since(&clock, meeting), "in 3 hours");

    clock.set(meeting);
    assert_eq!(phrase_since(&clock, meeting), "a few seconds ago");

    clock.advance(TimeDelta::days(40));
    assert_eq!(phrase_since(&clock, meeting), "a month ago");

    clock.advance(TimeDelta::days(700));
    assert_eq!(phrase_since(&clock, meeting), "2 years ago");
}

/// Verifies that the system clock and mock clock are interchangeable behind
/// the trait.
#[test]
fn test_clocks_behind_trait_objects() {
    let clocks: Vec<Box<dyn Clock>> = vec![
        Box::new(SystemClock),
        Box::new(MockClock::at(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())),
    ];

    for clock in &clocks {
        assert!(clock.millis_since_epoch() > 0);
    }
}
