//! Show command for listing every logged entry.

use std::io::{self, Write};

use anyhow::Result;
use mood_core::timestamp::DISPLAY_FORMAT;
use mood_core::{RecordSet, TIMESTAMP_COLUMN_NAMES, parse_timestamp};
use mood_store::RecordStore;

const MISSING: &str = "N/A";

/// Runs the show command.
pub fn run<W: Write>(writer: &mut W, store: &RecordStore) -> Result<()> {
    let records = match store.read_all() {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read record store");
            writeln!(
                writer,
                "An error occurred while trying to display the mood log: {e}"
            )?;
            return Ok(());
        }
    };

    if records.headers().is_empty() {
        writeln!(
            writer,
            "No mood log found or log is empty. Please log your mood first."
        )?;
        return Ok(());
    }
    if records.is_empty() {
        writeln!(writer, "Mood log is empty.")?;
        return Ok(());
    }

    let timestamp_column = display_timestamp_column(&records);
    let rows: Vec<Vec<String>> = records
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(index, cell)| format_cell(cell, Some(index) == timestamp_column))
                .collect()
        })
        .collect();

    write_table(writer, records.headers(), &rows)?;
    Ok(())
}

/// The column shown as a timestamp: a known name, else the first column.
///
/// Unlike resolution for metrics, the first column is used without checking
/// that it parses; cells that don't parse show as missing.
fn display_timestamp_column(records: &RecordSet) -> Option<usize> {
    TIMESTAMP_COLUMN_NAMES
        .iter()
        .find_map(|name| records.column_index(name))
        .or_else(|| (!records.headers().is_empty()).then_some(0))
}

fn format_cell(cell: &str, is_timestamp: bool) -> String {
    if is_timestamp {
        return parse_timestamp(cell).map_or_else(
            || MISSING.to_string(),
            |timestamp| timestamp.format(DISPLAY_FORMAT).to_string(),
        );
    }
    if cell.trim().is_empty() {
        MISSING.to_string()
    } else {
        cell.replace(['\r', '\n'], " ")
    }
}

fn write_table<W: Write>(writer: &mut W, headers: &[String], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|&width| "─".repeat(width)).collect();
    write_row(writer, headers, &widths)?;
    write_row(writer, &rule, &widths)?;
    for row in rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())
}
