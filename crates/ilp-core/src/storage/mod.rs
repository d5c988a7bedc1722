mod config;
pub mod database;
pub mod migrations;
mod state;

pub use config::{Config, DisplayConfig, TrackerConfig};
pub use database::Database;
pub use state::{AppState, Session, StateStore, TrackerRow, KEY_APP_STATE, KEY_COMPLETED_TODAY, KEY_LAST_RESET};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `ILP_DATA_DIR` wins outright. Otherwise `~/.config/ilp-tracker[-dev]/`,
/// where `ILP_ENV=dev` selects the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ILP_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ILP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ilp-tracker-dev")
            } else {
                base_dir.join("ilp-tracker")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
