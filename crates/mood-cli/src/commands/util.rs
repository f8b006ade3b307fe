//! Shared utilities for CLI commands.

use chrono::NaiveDate;
use mood_core::resolve_dates;
use mood_store::RecordStore;

/// Entry dates read from the store, with failures already degraded.
#[derive(Debug, Default)]
pub struct LoadedDates {
    /// One date per entry with a parseable timestamp.
    pub dates: Vec<NaiveDate>,
    /// Entries skipped because their timestamp did not parse.
    pub dropped: usize,
    /// Message for the user when the log could not be used.
    pub notice: Option<String>,
}

/// Reads the store and resolves entry dates for one computation.
///
/// Store and resolution failures never abort the command: they produce an
/// empty date list and a notice for the user. `purpose` names the metric in
/// that notice.
pub fn load_dates(store: &RecordStore, purpose: &str) -> LoadedDates {
    let records = match store.read_all() {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, purpose, "failed to read record store");
            return LoadedDates {
                notice: Some(format!("Error reading mood data for {purpose}: {e}")),
                ..LoadedDates::default()
            };
        }
    };

    if records.is_empty() {
        return LoadedDates::default();
    }

    match resolve_dates(&records) {
        Ok(resolved) => LoadedDates {
            dates: resolved.dates,
            dropped: resolved.dropped,
            notice: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, purpose, "failed to resolve entry timestamps");
            LoadedDates {
                notice: Some(format!("Could not compute {purpose}: {e}")),
                ..LoadedDates::default()
            }
        }
    }
}

/// Formats a day count as "1 day" or "N days".
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
