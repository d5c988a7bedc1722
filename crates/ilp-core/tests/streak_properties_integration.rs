//! Property tests for toggling and streak computation.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use ilp_core::{compute_streak, CompletionHistory, DailyCompletionState, Tracker};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Offsets in days before `base()`; 0 is today.
fn offsets() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..60, 0..40)
}

fn dates_from(offsets: &[i64]) -> Vec<NaiveDate> {
    offsets.iter().map(|n| base() - Duration::days(*n)).collect()
}

/// Reference: count back from today (or yesterday) until a day is missing.
fn naive_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut day = if dates.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

proptest! {
    #[test]
    fn double_toggle_restores_state(offs in offsets(), item in "[a-z]{1,8}") {
        let mut history = CompletionHistory::new();
        for d in dates_from(&offs) {
            history.mark(&item, d);
        }
        let mut daily = DailyCompletionState::new();
        daily.set(&item, history.is_completed_on(&item, base()));

        let mut tracker = Tracker::new(history, daily);
        let before = tracker.clone();
        tracker.toggle_completion(&item, base());
        tracker.toggle_completion(&item, base());
        prop_assert_eq!(tracker, before);
    }

    #[test]
    fn toggle_keeps_cache_in_sync(offs in offsets(), toggles in 1usize..6) {
        let mut history = CompletionHistory::new();
        for d in dates_from(&offs) {
            history.mark("sleep", d);
        }
        let mut daily = DailyCompletionState::new();
        daily.set("sleep", history.is_completed_on("sleep", base()));

        let mut tracker = Tracker::new(history, daily);
        for _ in 0..toggles {
            tracker.toggle_completion("sleep", base());
            prop_assert_eq!(
                tracker.is_done_today("sleep"),
                tracker.history().is_completed_on("sleep", base())
            );
        }
    }

    #[test]
    fn repeated_marks_never_duplicate(offs in offsets(), repeats in 1usize..4) {
        let mut history = CompletionHistory::new();
        for _ in 0..repeats {
            for d in dates_from(&offs) {
                history.mark("gratitude", d);
            }
        }
        let distinct: BTreeSet<_> = offs.iter().collect();
        prop_assert_eq!(history.total_completions(), distinct.len());
    }

    #[test]
    fn streak_is_pure_and_matches_reference(offs in offsets()) {
        let dates = dates_from(&offs);
        let first = compute_streak(dates.clone(), base());
        let second = compute_streak(dates.clone(), base());
        prop_assert_eq!(first, second);

        let set: BTreeSet<_> = dates.into_iter().collect();
        prop_assert_eq!(first, naive_streak(&set, base()));
    }

    #[test]
    fn no_recent_completion_means_zero(offs in prop::collection::vec(2i64..400, 0..50)) {
        prop_assert_eq!(compute_streak(dates_from(&offs), base()), 0);
    }
}
