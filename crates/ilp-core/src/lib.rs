//! # ILP Tracker Core Library
//!
//! This library provides the core logic for the ILP (Integral Life Practice)
//! tracker. All operations are available through the standalone `ilp` CLI,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Tracker**: completion history, the done-today cache and streak
//!   computation. Pure and clock-free; callers pass in "today".
//! - **Catalog**: built-in practices across the body, mind, spirit and shadow
//!   modules, starter stacks and user-created practices
//! - **Stack**: the practices a user has chosen to track, plus rule-based
//!   recommendations
//! - **Storage**: SQLite key-value snapshot storage and TOML configuration
//!
//! ## Key Components
//!
//! - [`Tracker`]: toggle completion and compute streaks
//! - [`StateStore`]: load/save a [`Session`] with day-boundary revalidation
//! - [`Catalog`]: practice lookup
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod error;
pub mod recommend;
pub mod stack;
pub mod storage;
pub mod tracker;

pub use catalog::{Catalog, CustomPractices, ModuleKey, Practice, StarterStack};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use recommend::{local_recommendations, Recommendation, RecommendationKind};
pub use stack::{PracticeStack, StackEntry};
pub use storage::{AppState, Config, Database, Session, StateStore, TrackerRow};
pub use tracker::{
    compute_streak, compute_streak_from_strs, CompletionHistory, DailyCompletionState,
    StreakSummary, Tracker,
};
