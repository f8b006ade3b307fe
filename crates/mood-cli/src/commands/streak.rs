//! Streak command for showing the current consecutive-day logging streak.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use mood_core::current_streak;
use mood_store::RecordStore;

use super::util::{format_days, load_dates};

/// Runs the streak command for the given local date.
pub fn run<W: Write>(writer: &mut W, store: &RecordStore, today: NaiveDate) -> Result<()> {
    let loaded = load_dates(store, "streak");
    if let Some(notice) = &loaded.notice {
        writeln!(writer, "{notice}")?;
    }

    let streak = current_streak(&loaded.dates, today);
    tracing::debug!(streak, %today, "computed streak");

    writeln!(writer, "Current mood log streak: {}", format_days(streak))?;
    Ok(())
}
