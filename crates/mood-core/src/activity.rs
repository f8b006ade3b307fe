//! Per-day activity counts for the heatmap.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Sparse count of records per calendar day, ordered by date.
///
/// Days without records are absent; renderers treat them as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCounts(BTreeMap<NaiveDate, u32>);

impl DailyCounts {
    /// Number of records logged on `date`.
    pub fn get(&self, date: NaiveDate) -> u32 {
        self.0.get(&date).copied().unwrap_or(0)
    }

    /// Total records across all days.
    pub fn total(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }

    /// The busiest day's count, or 0 when empty.
    pub fn max(&self) -> u32 {
        self.0.values().copied().max().unwrap_or(0)
    }

    /// Number of days with at least one record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.0.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.0.keys().next_back().copied()
    }

    /// Days and counts in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.0.iter().map(|(&date, &count)| (date, count))
    }
}

impl FromIterator<NaiveDate> for DailyCounts {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for date in iter {
            *counts.entry(date).or_insert(0) += 1;
        }
        Self(counts)
    }
}

/// Counts records per day. Every date counts, including repeats.
pub fn daily_counts(dates: &[NaiveDate]) -> DailyCounts {
    dates.iter().copied().collect()
}
