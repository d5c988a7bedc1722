//! Completion and streak tracking.
//!
//! [`Tracker`] owns the completion history and the "done today" cache and is
//! the only thing that mutates them. It never reads the clock: every
//! operation takes the caller's local date.

mod completion;
pub mod date;
mod streak;

pub use completion::{CompletionHistory, DailyCompletionState};
pub use date::{format_date, parse_date, today_local};
pub use streak::{compute_streak, compute_streak_from_strs, longest_streak, StreakSummary};

use chrono::NaiveDate;
use tracing::debug;

/// Host-owned tracker state.
///
/// Toggling needs `&mut self`; hosts that share a tracker across threads
/// wrap it in a `Mutex` so the read-modify-write of one item's dates is
/// never interleaved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    history: CompletionHistory,
    daily: DailyCompletionState,
}

impl Tracker {
    pub fn new(history: CompletionHistory, daily: DailyCompletionState) -> Self {
        Self { history, daily }
    }

    /// Flip an item's done-today flag and mirror it into the history.
    ///
    /// Returns the new flag. Afterwards `is_done_today(item_id)` equals
    /// whether `today` is in the item's completion dates.
    pub fn toggle_completion(&mut self, item_id: &str, today: NaiveDate) -> bool {
        let done = !self.daily.is_done(item_id);
        self.daily.set(item_id, done);

        if done {
            self.history.mark(item_id, today);
        } else {
            self.history.unmark(item_id, today);
        }

        debug!(item_id, %today, done, "toggled completion");
        done
    }

    pub fn is_done_today(&self, item_id: &str) -> bool {
        self.daily.is_done(item_id)
    }

    /// Current streak for one item. Items with no history have a streak of 0.
    pub fn streak(&self, item_id: &str, today: NaiveDate) -> u32 {
        self.history
            .dates(item_id)
            .map_or(0, |dates| compute_streak(dates.iter().copied(), today))
    }

    pub fn summary(&self, item_id: &str, today: NaiveDate) -> StreakSummary {
        let dates = self.history.dates(item_id).into_iter().flatten();
        StreakSummary::from_dates(item_id, dates, today)
    }

    pub fn history(&self) -> &CompletionHistory {
        &self.history
    }

    pub fn daily(&self) -> &DailyCompletionState {
        &self.daily
    }

    pub fn into_parts(self) -> (CompletionHistory, DailyCompletionState) {
        (self.history, self.daily)
    }
}
