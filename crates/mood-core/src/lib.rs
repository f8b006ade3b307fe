//! Core domain logic for the mood tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Resolution: finding the timestamp column in a raw log and reducing it to dates
//! - Streaks: counting consecutive logged days ending today or yesterday
//! - Activity: per-day record counts for the heatmap

mod activity;
mod records;
pub mod resolve;
mod streak;
pub mod timestamp;
pub mod types;

pub use activity::{DailyCounts, daily_counts};
pub use records::RecordSet;
pub use resolve::{ResolveError, ResolvedDates, TIMESTAMP_COLUMN_NAMES, resolve_dates};
pub use streak::current_streak;
pub use timestamp::parse_timestamp;
pub use types::{Mood, MoodEntry, UnknownMood, ValidationError};
