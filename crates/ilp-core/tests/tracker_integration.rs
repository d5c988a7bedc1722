//! Integration tests for the tracker scenarios and a full store round trip.

use chrono::{Duration, NaiveDate};
use ilp_core::{
    compute_streak, compute_streak_from_strs, CompletionHistory, Database, StateStore, Tracker,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
}

fn ago(n: i64) -> NaiveDate {
    today() - Duration::days(n)
}

#[test]
fn scenario_empty_history() {
    assert_eq!(compute_streak(Vec::new(), today()), 0);
}

#[test]
fn scenario_today_only() {
    assert_eq!(compute_streak(vec![ago(0)], today()), 1);
}

#[test]
fn scenario_three_days_through_today() {
    assert_eq!(compute_streak(vec![ago(0), ago(1), ago(2)], today()), 3);
}

#[test]
fn scenario_run_ending_yesterday() {
    assert_eq!(compute_streak(vec![ago(1), ago(2)], today()), 2);
}

#[test]
fn scenario_day_before_yesterday_only() {
    assert_eq!(compute_streak(vec![ago(2)], today()), 0);
}

#[test]
fn gap_two_days_ago_stops_count() {
    assert_eq!(compute_streak(vec![ago(0), ago(1), ago(3)], today()), 2);
}

#[test]
fn scenario_toggle_on_then_off_is_a_noop() {
    let mut history = CompletionHistory::new();
    history.mark("meditation", ago(1));
    history.mark("meditation", ago(2));
    let snapshot = history.clone();

    let mut tracker = Tracker::new(history, Default::default());
    tracker.toggle_completion("meditation", today());
    assert_eq!(tracker.streak("meditation", today()), 3);
    tracker.toggle_completion("meditation", today());
    assert_eq!(tracker.history(), &snapshot);
    assert_eq!(tracker.streak("meditation", today()), 2);
}

#[test]
fn leap_day_streak_from_strings() {
    let streak =
        compute_streak_from_strs(&["2024-03-01", "2024-02-29", "2024-02-28"], "2024-03-01").unwrap();
    assert_eq!(streak, 3);
}

#[test]
fn week_of_use_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ilp.db");
    let start = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();

    // Completing every day from Dec 28 through Jan 3, reopening each day.
    for n in 0..7 {
        let day = start + Duration::days(n);
        let store = StateStore::new(Database::open_at(&path).unwrap());
        let mut session = store.load(day).unwrap();
        if n == 0 {
            session.add_to_stack("meditation").unwrap();
        }
        assert!(!session.tracker.is_done_today("meditation"));
        assert!(session.toggle("meditation").unwrap());
        assert_eq!(session.streak("meditation"), n as u32 + 1);
        store.save(&session).unwrap();
    }

    // Skip Jan 4, check on Jan 5: the run ended two days ago.
    let store = StateStore::new(Database::open_at(&path).unwrap());
    let session = store.load(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()).unwrap();
    let summary = &session.streak_summaries()[0];
    assert_eq!(summary.current_streak, 0);
    assert_eq!(summary.longest_streak, 7);
    assert_eq!(summary.total_days, 7);
}
