//! Status command for a summary of the mood log.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use mood_core::{current_streak, daily_counts};
use mood_store::RecordStore;

use super::util::{format_days, load_dates};

pub fn run<W: Write>(writer: &mut W, store: &RecordStore, today: NaiveDate) -> Result<()> {
    let loaded = load_dates(store, "status");
    let counts = daily_counts(&loaded.dates);

    writeln!(writer, "Mood log status")?;
    writeln!(writer, "Log file: {}", store.path().display())?;

    if let Some(notice) = &loaded.notice {
        writeln!(writer, "{notice}")?;
    }

    if counts.is_empty() {
        writeln!(writer, "No moods logged yet.")?;
        return Ok(());
    }

    writeln!(writer, "Entries:        {}", counts.total())?;
    if loaded.dropped > 0 {
        writeln!(writer, "Unreadable:     {}", loaded.dropped)?;
    }
    writeln!(writer, "Active days:    {}", counts.len())?;
    if let Some(last) = counts.last_date() {
        writeln!(writer, "Last entry:     {last}")?;
    }
    writeln!(
        writer,
        "Current streak: {}",
        format_days(current_streak(&loaded.dates, today))
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use insta::assert_snapshot;

    fn status(store: &RecordStore, today: NaiveDate) -> String {
        let mut output = Vec::new();
        run(&mut output, store, today).unwrap();
        let output = String::from_utf8(output).unwrap();
        output.replace(&store.path().display().to_string(), "[TEMP]/mood_data.csv")
    }

    #[test]
    fn status_summarizes_entries_and_streak() {
        let temp = tempfile::tempdir().unwrap();
        let store = RecordStore::in_dir(temp.path());
        fs::write(
            store.path(),
            "timestamp,mood,reason\n\
             2024-01-02 21:00:00.000000,Sad,rain\n\
             2024-01-03 08:00:00.000000,Happy,sun\n\
             2024-01-03 20:00:00.000000,Neutral,ok\n\
             sometime,Angry,?\n",
        )
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_snapshot!(status(&store, today), @r"
        Mood log status
        Log file: [TEMP]/mood_data.csv
        Entries:        3
        Unreadable:     1
        Active days:    2
        Last entry:     2024-01-03
        Current streak: 2 days
        ");
    }

    #[test]
    fn status_with_empty_log() {
        let temp = tempfile::tempdir().unwrap();
        let store = RecordStore::in_dir(temp.path());

        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_snapshot!(status(&store, today), @r"
        Mood log status
        Log file: [TEMP]/mood_data.csv
        No moods logged yet.
        ");
    }
}
