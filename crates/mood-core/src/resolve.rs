//! Timestamp column resolution.
//!
//! The mood log has gone through a few schemas. Current files name the time
//! column `timestamp`, older ones `Date and Time`, and some hand-edited files
//! have an arbitrary first column that still holds timestamps. Resolution
//! tries a fixed list of strategies in order and takes the first that applies.

use chrono::NaiveDate;
use thiserror::Error;

use crate::records::RecordSet;
use crate::timestamp::parse_timestamp;

/// Column names recognised as holding the entry time, most preferred first.
pub const TIMESTAMP_COLUMN_NAMES: [&str; 2] = ["timestamp", "Date and Time"];

/// Errors from timestamp resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No column could be identified as holding timestamps.
    #[error("could not identify a suitable timestamp column{}", describe_columns(.columns))]
    NoTimestampColumn { columns: Vec<String> },
}

fn describe_columns(columns: &[String]) -> String {
    if columns.is_empty() {
        " (the log has no columns)".to_string()
    } else {
        format!(" among: {}", columns.join(", "))
    }
}

/// A way of picking the timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStrategy {
    /// A column with exactly this name.
    Named(&'static str),
    /// The first column, if every non-blank value in it parses.
    FirstColumnParses,
}

/// Strategies tried in order by [`resolve_dates`].
pub const COLUMN_STRATEGIES: [ColumnStrategy; 3] = [
    ColumnStrategy::Named(TIMESTAMP_COLUMN_NAMES[0]),
    ColumnStrategy::Named(TIMESTAMP_COLUMN_NAMES[1]),
    ColumnStrategy::FirstColumnParses,
];

impl ColumnStrategy {
    /// Returns the index of the column this strategy selects, or `None` if
    /// the strategy does not apply to these records.
    pub fn select(self, records: &RecordSet) -> Option<usize> {
        match self {
            Self::Named(name) => records.column_index(name),
            Self::FirstColumnParses => {
                if records.headers().is_empty() {
                    return None;
                }
                let parses = records
                    .column(0)
                    .filter(|value| !value.trim().is_empty())
                    .all(|value| parse_timestamp(value).is_some());
                parses.then_some(0)
            }
        }
    }
}

/// Calendar dates recovered from a record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDates {
    /// Name of the column the dates were read from.
    pub column: String,
    /// One date per parsed record, in record order.
    pub dates: Vec<NaiveDate>,
    /// Records whose timestamp could not be parsed.
    pub dropped: usize,
}

/// Finds the timestamp column and reduces every parseable value to its
/// calendar date.
///
/// Unparseable values are dropped and counted rather than failing the batch.
/// An empty result is not an error.
pub fn resolve_dates(records: &RecordSet) -> Result<ResolvedDates, ResolveError> {
    let index = COLUMN_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.select(records))
        .ok_or_else(|| ResolveError::NoTimestampColumn {
            columns: records.headers().to_vec(),
        })?;

    let column = records.headers()[index].clone();
    let mut dates = Vec::with_capacity(records.len());
    let mut dropped = 0;
    for value in records.column(index) {
        match parse_timestamp(value) {
            Some(timestamp) => dates.push(timestamp.date()),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(column = %column, dropped, "dropped records with unparseable timestamps");
    }
    tracing::debug!(column = %column, parsed = dates.len(), "resolved record dates");

    Ok(ResolvedDates {
        column,
        dates,
        dropped,
    })
}
