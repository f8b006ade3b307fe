//! Heatmap command for rendering daily logging activity.
//!
//! Renders one calendar block per year in the log, weeks as columns starting
//! on Monday, in the style of a contribution graph.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, Days, NaiveDate};
use mood_core::{DailyCounts, daily_counts};
use mood_store::RecordStore;
use serde::Serialize;

use super::util::load_dates;

/// Cell glyphs from lightest to heaviest activity.
const LEVELS: [char; 4] = ['░', '▒', '▓', '█'];

/// Glyph for an in-year day with no entries.
const EMPTY_DAY: char = '·';

/// Row labels, Monday first. Only every other weekday is labelled.
const DAY_LABELS: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", ""];

const LABEL_WIDTH: usize = 4;

/// Printed when there is nothing to render.
pub const NO_DATA_MESSAGE: &str = "Log some moods to see your activity heatmap!";

/// Runs the heatmap command.
///
/// In JSON mode notices go to `notices` so `writer` only ever holds JSON.
pub fn run<W: Write, E: Write>(
    writer: &mut W,
    notices: &mut E,
    store: &RecordStore,
    json: bool,
) -> Result<()> {
    let loaded = load_dates(store, "heatmap");
    let counts = daily_counts(&loaded.dates);

    if json {
        if let Some(notice) = &loaded.notice {
            writeln!(notices, "{notice}")?;
        }
        writeln!(writer, "{}", format_heatmap_json(&counts)?)?;
        return Ok(());
    }

    if let Some(notice) = &loaded.notice {
        writeln!(writer, "{notice}")?;
    }

    if counts.is_empty() {
        writeln!(writer, "{NO_DATA_MESSAGE}")?;
        return Ok(());
    }

    writeln!(writer, "Mood Log Activity")?;
    writeln!(writer)?;
    write!(writer, "{}", render_heatmap(&counts))?;
    Ok(())
}

// ========== JSON Output ==========

#[derive(Debug, Serialize)]
pub struct JsonHeatmap {
    pub total: u64,
    pub days: Vec<JsonDay>,
}

#[derive(Debug, Serialize)]
pub struct JsonDay {
    pub date: String,
    pub count: u32,
}

/// Formats daily counts as pretty JSON.
pub fn format_heatmap_json(counts: &DailyCounts) -> Result<String> {
    let report = JsonHeatmap {
        total: counts.total(),
        days: counts
            .iter()
            .map(|(date, count)| JsonDay {
                date: date.format("%Y-%m-%d").to_string(),
                count,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Text Rendering ==========

/// Picks the glyph for a day, scaled against the busiest day.
fn level_glyph(count: u32, max: u32) -> char {
    if count == 0 || max == 0 {
        return EMPTY_DAY;
    }
    let level = (u64::from(count) * LEVELS.len() as u64).div_ceil(u64::from(max));
    let index = usize::try_from(level).unwrap_or(LEVELS.len()).clamp(1, LEVELS.len()) - 1;
    LEVELS[index]
}

/// Index of the week column holding `date`.
fn week_column(grid_start: NaiveDate, date: NaiveDate) -> usize {
    usize::try_from((date - grid_start).num_days() / 7).unwrap_or(0)
}

/// Renders one block for each year that has at least one logged day.
pub fn render_heatmap(counts: &DailyCounts) -> String {
    if counts.is_empty() {
        return String::new();
    }
    let max = counts.max();
    let years: BTreeSet<i32> = counts.iter().map(|(date, _)| date.year()).collect();

    let mut output = String::new();
    for (index, &year) in years.iter().enumerate() {
        if index > 0 {
            writeln!(output).unwrap();
        }
        render_year(&mut output, counts, year, max);
    }

    let scale: Vec<String> = LEVELS.iter().map(char::to_string).collect();
    writeln!(output).unwrap();
    writeln!(
        output,
        "{:LABEL_WIDTH$}Less {EMPTY_DAY} {} More",
        "",
        scale.join(" ")
    )
    .unwrap();
    output
}

fn render_year(output: &mut String, counts: &DailyCounts, year: i32, max: u32) {
    let (Some(jan_first), Some(dec_last)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return;
    };
    let lead = u64::from(jan_first.weekday().num_days_from_monday());
    let Some(grid_start) = jan_first.checked_sub_days(Days::new(lead)) else {
        return;
    };
    let weeks = week_column(grid_start, dec_last) + 1;

    writeln!(output, "{year}").unwrap();

    // Month names start at the column holding the 1st of the month.
    let mut months = vec![' '; weeks];
    let mut next_free = 0;
    for month in 1..=12 {
        let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        let column = week_column(grid_start, first_of_month);
        if column < next_free {
            continue;
        }
        let name = first_of_month.format("%b").to_string();
        for (offset, ch) in name.chars().enumerate() {
            if let Some(slot) = months.get_mut(column + offset) {
                *slot = ch;
            }
        }
        next_free = column + name.len() + 1;
    }
    let months: String = months.into_iter().collect();
    writeln!(output, "{:LABEL_WIDTH$}{}", "", months.trim_end()).unwrap();

    for (weekday, label) in DAY_LABELS.iter().enumerate() {
        let mut line = format!("{label:<LABEL_WIDTH$}");
        for week in 0..weeks {
            let offset = (week * 7 + weekday) as u64;
            let cell = grid_start
                .checked_add_days(Days::new(offset))
                .filter(|day| day.year() == year)
                .map_or(' ', |day| level_glyph(counts.get(day), max));
            line.push(cell);
        }
        writeln!(output, "{}", line.trim_end()).unwrap();
    }
}
