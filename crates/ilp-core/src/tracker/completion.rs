//! Completion history and the "done today" cache.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::date::parse_date;

/// Per-item set of local calendar dates on which the item was done.
///
/// Serialized as `{ "<item id>": ["YYYY-MM-DD", ...] }`. Records are created
/// on first completion; an item whose last date is removed drops out, so an
/// empty set and a missing record are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionHistory {
    records: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl CompletionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dates for one item, if it has ever been completed.
    pub fn dates(&self, item_id: &str) -> Option<&BTreeSet<NaiveDate>> {
        self.records.get(item_id).filter(|dates| !dates.is_empty())
    }

    pub fn is_completed_on(&self, item_id: &str, date: NaiveDate) -> bool {
        self.records
            .get(item_id)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Insert a completion date. Returns `false` if it was already present.
    pub fn mark(&mut self, item_id: &str, date: NaiveDate) -> bool {
        self.records
            .entry(item_id.to_string())
            .or_default()
            .insert(date)
    }

    /// Remove a completion date. Returns `false` if it was absent.
    pub fn unmark(&mut self, item_id: &str, date: NaiveDate) -> bool {
        let Some(dates) = self.records.get_mut(item_id) else {
            return false;
        };
        let removed = dates.remove(&date);
        if dates.is_empty() {
            self.records.remove(item_id);
        }
        removed
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(_, dates)| !dates.is_empty())
            .map(|(id, _)| id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(BTreeSet::is_empty)
    }

    /// Total completion days across all items.
    pub fn total_completions(&self) -> usize {
        self.records.values().map(BTreeSet::len).sum()
    }
}

impl<'de> Deserialize<'de> for CompletionHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        let mut records = BTreeMap::new();
        for (item_id, dates) in raw {
            let parsed = dates
                .iter()
                .map(|d| parse_date(d))
                .collect::<Result<BTreeSet<_>, _>>()
                .map_err(serde::de::Error::custom)?;
            if !parsed.is_empty() {
                records.insert(item_id, parsed);
            }
        }
        Ok(Self { records })
    }
}

/// Whether each item has been marked done today.
///
/// A cache of "today is in this item's history"; it must be rebuilt from
/// the history whenever the local date moves past the day it was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyCompletionState {
    completed: BTreeMap<String, bool>,
}

impl DailyCompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map for `today` from the completion history.
    pub fn from_history(history: &CompletionHistory, today: NaiveDate) -> Self {
        let completed = history
            .item_ids()
            .filter(|id| history.is_completed_on(id, today))
            .map(|id| (id.to_string(), true))
            .collect();
        Self { completed }
    }

    pub fn is_done(&self, item_id: &str) -> bool {
        self.completed.get(item_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, item_id: &str, done: bool) {
        self.completed.insert(item_id.to_string(), done);
    }

    pub fn done_count(&self) -> usize {
        self.completed.values().filter(|done| **done).count()
    }
}
