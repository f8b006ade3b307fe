//! Log command for appending a mood entry.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use mood_core::{Mood, MoodEntry};
use mood_store::RecordStore;

/// Appends an entry logged at `now`.
pub fn run<W: Write>(
    writer: &mut W,
    store: &RecordStore,
    mood: Mood,
    reason: &str,
    now: NaiveDateTime,
) -> Result<()> {
    let entry = MoodEntry::new(now, mood, reason)
        .context("Please select a mood and provide a reason.")?;

    store
        .append(&entry, true)
        .context("failed to save mood entry")?;

    writeln!(writer, "Mood logged successfully!")?;
    Ok(())
}
