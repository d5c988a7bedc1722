//! Persisted application state and the session that owns it while a host
//! is running.
//!
//! Three keys are stored, mirroring the layout of the browser client:
//! - `ilp-app-state-v2`: the main JSON snapshot ([`AppState`])
//! - `ilp-completed-today`: the done-today map
//! - `ilp-last-reset`: the local date the done-today map belongs to
//!
//! On load the done-today map is rebuilt from the completion history unless
//! the reset marker equals the caller's "today".

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::Database;
use crate::catalog::{Catalog, CustomPractices, ModuleKey, Practice};
use crate::error::{DatabaseError, Result, ValidationError};
use crate::recommend::{local_recommendations, Recommendation};
use crate::stack::PracticeStack;
use crate::tracker::{
    format_date, parse_date, CompletionHistory, DailyCompletionState, StreakSummary, Tracker,
};

pub const KEY_APP_STATE: &str = "ilp-app-state-v2";
pub const KEY_COMPLETED_TODAY: &str = "ilp-completed-today";
pub const KEY_LAST_RESET: &str = "ilp-last-reset";

/// Everything that is backed up and restored as one JSON document.
///
/// Top-level fields this crate does not model (journaling sessions, parts
/// library, reports) are kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub practice_stack: PracticeStack,
    #[serde(default)]
    pub practice_notes: BTreeMap<String, String>,
    /// Keyed `<practice id>-<YYYY-MM-DD>`.
    #[serde(default)]
    pub daily_notes: BTreeMap<String, String>,
    #[serde(default)]
    pub favorites: BTreeMap<String, bool>,
    #[serde(default)]
    pub selected_module: ModuleKey,
    #[serde(default)]
    pub completion_history: CompletionHistory,
    #[serde(default)]
    pub custom_practices: CustomPractices,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AppState {
    pub fn daily_note_key(practice_id: &str, date: NaiveDate) -> String {
        format!("{practice_id}-{}", format_date(date))
    }
}

/// One line of the daily tracker view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerRow {
    pub id: String,
    /// The practice name, or the id when nothing is known about it.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleKey>,
    pub done_today: bool,
    pub streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_note: Option<String>,
}

/// Loads and saves sessions through a [`Database`].
pub struct StateStore {
    db: Database,
}

impl StateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Load the saved session for `today`.
    ///
    /// Nothing is written here. A missing snapshot yields an empty state;
    /// an unreadable one is an error and stays untouched in storage. If the
    /// reset marker is not `today`, the done-today map is rebuilt from the
    /// completion history, and [`StateStore::save`] later moves the marker.
    pub fn load(&self, today: NaiveDate) -> Result<Session> {
        let mut state = match self.db.kv_get(KEY_APP_STATE)? {
            Some(json) => {
                serde_json::from_str::<AppState>(&json).map_err(|e| DatabaseError::Corrupt {
                    key: KEY_APP_STATE.to_string(),
                    message: e.to_string(),
                })?
            }
            None => AppState::default(),
        };
        let history = std::mem::take(&mut state.completion_history);

        let last_reset = self
            .db
            .kv_get(KEY_LAST_RESET)?
            .and_then(|raw| parse_date(&raw).ok());

        let daily = if last_reset == Some(today) {
            match self.db.kv_get(KEY_COMPLETED_TODAY)? {
                Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                    warn!("saved completion map is unreadable, rebuilding it: {e}");
                    DailyCompletionState::from_history(&history, today)
                }),
                None => DailyCompletionState::from_history(&history, today),
            }
        } else {
            debug!(%today, ?last_reset, "new day, rebuilding done-today map");
            DailyCompletionState::from_history(&history, today)
        };

        Ok(Session {
            state,
            tracker: Tracker::new(history, daily),
            today,
        })
    }

    /// Persist every key of a session.
    pub fn save(&self, session: &Session) -> Result<()> {
        self.db.kv_set(KEY_APP_STATE, &session.snapshot_json(false)?)?;
        self.db
            .kv_set(KEY_COMPLETED_TODAY, &serde_json::to_string(session.tracker.daily())?)?;
        self.db.kv_set(KEY_LAST_RESET, &format_date(session.today))?;
        Ok(())
    }

    /// Delete all stored keys.
    pub fn reset(&self) -> Result<()> {
        for key in [KEY_APP_STATE, KEY_COMPLETED_TODAY, KEY_LAST_RESET] {
            self.db.kv_delete(key)?;
        }
        info!("all tracker data reset");
        Ok(())
    }
}

/// Host-side state for one run: the snapshot plus the tracker that owns
/// completion data.
#[derive(Debug, Clone)]
pub struct Session {
    /// Snapshot fields. `completion_history` stays empty here; the tracker
    /// holds the live history.
    pub state: AppState,
    pub tracker: Tracker,
    today: NaiveDate,
}

impl Session {
    pub fn new(mut state: AppState, today: NaiveDate) -> Self {
        let history = std::mem::take(&mut state.completion_history);
        let daily = DailyCompletionState::from_history(&history, today);
        Self {
            state,
            tracker: Tracker::new(history, daily),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::with_custom(&self.state.custom_practices)
    }

    /// Whether an id names a catalog practice or a stack entry.
    pub fn knows(&self, practice_id: &str) -> bool {
        self.state.practice_stack.contains(practice_id) || self.catalog().find(practice_id).is_some()
    }

    /// Metadata for a practice from the catalog or, failing that, the stack.
    pub fn find_practice(&self, practice_id: &str) -> Option<Practice> {
        let catalog = self.catalog();
        if let Some(practice) = catalog.find(practice_id) {
            return Some(practice.clone());
        }
        self.state
            .practice_stack
            .entries()
            .iter()
            .find(|e| e.id() == practice_id)
            .and_then(|e| e.practice().cloned())
    }

    /// Toggle today's completion for a known practice.
    pub fn toggle(&mut self, practice_id: &str) -> Result<bool> {
        if !self.knows(practice_id) {
            return Err(ValidationError::UnknownPractice(practice_id.to_string()).into());
        }
        Ok(self.tracker.toggle_completion(practice_id, self.today))
    }

    pub fn streak(&self, practice_id: &str) -> u32 {
        self.tracker.streak(practice_id, self.today)
    }

    pub fn streak_summaries(&self) -> Vec<StreakSummary> {
        self.state
            .practice_stack
            .ids()
            .into_iter()
            .map(|id| self.tracker.summary(id, self.today))
            .collect()
    }

    /// Today's checklist for every stacked practice.
    pub fn tracker_rows(&self) -> Vec<TrackerRow> {
        let catalog = self.catalog();
        self.state
            .practice_stack
            .resolved(&catalog)
            .map(|(id, practice)| TrackerRow {
                id: id.to_string(),
                name: practice.map_or_else(|| id.to_string(), |p| p.name.clone()),
                module: practice.map(|p| p.module),
                done_today: self.tracker.is_done_today(id),
                streak: self.tracker.streak(id, self.today),
                daily_note: self
                    .state
                    .daily_notes
                    .get(&AppState::daily_note_key(id, self.today))
                    .cloned(),
            })
            .collect()
    }

    pub fn add_to_stack(&mut self, practice_id: &str) -> Result<Practice> {
        let catalog = self.catalog();
        let practice = self.state.practice_stack.add(&catalog, practice_id)?;
        Ok(practice.clone())
    }

    pub fn remove_from_stack(&mut self, practice_id: &str) -> bool {
        self.state.practice_stack.remove(practice_id)
    }

    pub fn apply_starter(&mut self, key: &str) -> Result<Vec<String>> {
        let catalog = self.catalog();
        Ok(self.state.practice_stack.apply_starter(&catalog, key)?)
    }

    pub fn add_custom_practice(&mut self, practice: Practice) -> String {
        let id = practice.id.clone();
        self.state.custom_practices.add(practice);
        id
    }

    /// Set or clear (with an empty string) a practice's general note.
    pub fn set_note(&mut self, practice_id: &str, note: &str) {
        set_or_clear(&mut self.state.practice_notes, practice_id.to_string(), note);
    }

    /// Set or clear today's note for a practice.
    pub fn set_daily_note(&mut self, practice_id: &str, note: &str) {
        let key = AppState::daily_note_key(practice_id, self.today);
        set_or_clear(&mut self.state.daily_notes, key, note);
    }

    /// Flip a practice's favorite flag and return the new value.
    pub fn toggle_favorite(&mut self, practice_id: &str) -> bool {
        let flag = self
            .state
            .favorites
            .entry(practice_id.to_string())
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// The module browsed last; lists default to it.
    pub fn selected_module(&self) -> ModuleKey {
        self.state.selected_module
    }

    pub fn select_module(&mut self, module: ModuleKey) {
        self.state.selected_module = module;
    }

    pub fn recommendations(&self, time_alert_hours: f64) -> Vec<Recommendation> {
        local_recommendations(&self.state.practice_stack, &self.catalog(), time_alert_hours)
    }

    /// Full snapshot JSON with the live completion history folded back in.
    pub fn snapshot_json(&self, pretty: bool) -> Result<String> {
        let mut snapshot = self.state.clone();
        snapshot.completion_history = self.tracker.history().clone();
        let json = if pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        Ok(json)
    }

    /// Write a backup file.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.snapshot_json(true)?)?;
        info!(path = %path.display(), "exported backup");
        Ok(())
    }

    /// Replace snapshot state from a backup file.
    ///
    /// Nothing changes if the file cannot be read or parsed. The done-today
    /// map is rebuilt from the imported history so it keeps matching it.
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let mut imported: AppState = serde_json::from_str(&content)?;
        let history = std::mem::take(&mut imported.completion_history);
        let daily = DailyCompletionState::from_history(&history, self.today);

        self.state = imported;
        self.tracker = Tracker::new(history, daily);
        info!(path = %path.display(), "imported backup");
        Ok(())
    }
}

fn set_or_clear(map: &mut BTreeMap<String, String>, key: String, note: &str) {
    let note = note.trim();
    if note.is_empty() {
        map.remove(&key);
    } else {
        map.insert(key, note.to_string());
    }
}
