//! Streak computation over a sparse completion history.
//!
//! A streak is the run of consecutive days, ending today or yesterday, on
//! which an item was completed every day. A gap yesterday with nothing done
//! today breaks it, no matter how long the earlier run was.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::parse_date;
use crate::error::ValidationError;

/// Current streak for a set of completion dates, relative to `today`.
///
/// Duplicates are collapsed and dates after `today` are ignored.
pub fn compute_streak<I>(completed_dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let dates: BTreeSet<NaiveDate> = completed_dates.into_iter().collect();
    if dates.is_empty() {
        return 0;
    }

    let done_today = dates.contains(&today);
    let Some(yesterday) = today.pred_opt() else {
        return u32::from(done_today);
    };

    // Today is counted up front, so the walk starts at yesterday either way.
    let mut streak = if done_today {
        1
    } else if dates.contains(&yesterday) {
        0
    } else {
        return 0;
    };
    let mut expected = yesterday;

    for &date in dates.iter().rev() {
        if date == expected {
            streak += 1;
            match expected.pred_opt() {
                Some(prev) => expected = prev,
                None => break,
            }
        } else if date < expected {
            break;
        }
    }

    streak
}

/// String form of [`compute_streak`] for callers holding raw stored dates.
///
/// Fails fast on the first malformed date instead of skipping it.
pub fn compute_streak_from_strs<S: AsRef<str>>(
    completed_dates: &[S],
    today: &str,
) -> Result<u32, ValidationError> {
    let today = parse_date(today)?;
    let dates = completed_dates
        .iter()
        .map(|d| parse_date(d.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(compute_streak(dates, today))
}

/// Longest run of consecutive completion days anywhere in the history.
pub fn longest_streak<I>(completed_dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let dates: BTreeSet<NaiveDate> = completed_dates.into_iter().collect();
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in dates {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == date => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }

    longest
}

/// Per-item streak overview shown in the streaks view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub item_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub last_completed: Option<NaiveDate>,
}

impl StreakSummary {
    pub fn from_dates<'a, I>(item_id: &str, completed_dates: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a NaiveDate>,
    {
        let dates: BTreeSet<NaiveDate> = completed_dates.into_iter().copied().collect();
        Self {
            item_id: item_id.to_string(),
            current_streak: compute_streak(dates.iter().copied(), today),
            longest_streak: longest_streak(dates.iter().copied()),
            total_days: dates.len() as u32,
            last_completed: dates.iter().next_back().copied(),
        }
    }
}
