pub mod backup;
pub mod config;
pub mod note;
pub mod practice;
pub mod stack;
pub mod track;

use chrono::NaiveDate;
use ilp_core::storage::StateStore;
use ilp_core::tracker::{parse_date, today_local};
use ilp_core::Session;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Per-invocation settings shared by every command.
pub struct Context {
    pub today: NaiveDate,
    pub json: bool,
}

impl Context {
    pub fn new(date: Option<&str>, json: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let today = match date {
            Some(raw) => parse_date(raw)?,
            None => today_local(),
        };
        Ok(Self { today, json })
    }

    pub fn load(&self) -> Result<(StateStore, Session), Box<dyn std::error::Error>> {
        let store = StateStore::open()?;
        let session = store.load(self.today)?;
        Ok((store, session))
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
