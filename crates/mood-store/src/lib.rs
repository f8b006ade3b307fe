//! Storage layer for the mood tracker.
//!
//! Entries live in a single append-only CSV file. Nothing is ever updated or
//! deleted; every computation re-reads the whole file.
//!
//! # Format
//!
//! Files written by this crate start with a `timestamp,mood,reason` header and
//! store timestamps as local time in `YYYY-MM-DD HH:MM:SS.ffffff` form. Older
//! files may use other header names, which is why [`RecordStore::read_all`]
//! returns raw [`RecordSet`]s instead of typed entries.
//!
//! # Concurrency
//!
//! The store assumes a single writer. Appends are not locked.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use mood_core::{MoodEntry, RecordSet};
use thiserror::Error;

/// Header written to new or empty stores.
pub const HEADER: [&str; 3] = ["timestamp", "mood", "reason"];

/// File name of the record store inside the data directory.
pub const STORE_FILE_NAME: &str = "mood_data.csv";

/// Record store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file could not be parsed as CSV.
    #[error("malformed record store {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A row has more cells than the header names.
    #[error(
        "malformed record store {}: line {line} has {found} fields, expected {expected}",
        .path.display()
    )]
    TooManyFields {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },
}

/// Append-only CSV log of mood entries.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Opens the store at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store inside a data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    /// Returns `true` when the file is missing or has no bytes.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Reads every record in the store.
    ///
    /// A missing, zero-byte or header-less file yields an empty set. Blank
    /// header names become `Unnamed: N`. Short rows are padded with blank
    /// cells; rows with extra cells are an error.
    pub fn read_all(&self) -> Result<RecordSet, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "record store not found");
                return Ok(RecordSet::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| self.csv_error(e))?
            .iter()
            .enumerate()
            .map(|(index, name)| {
                if name.trim().is_empty() {
                    format!("Unnamed: {index}")
                } else {
                    name.to_string()
                }
            })
            .collect();
        if headers.is_empty() {
            tracing::debug!(path = %self.path.display(), "record store is empty");
            return Ok(RecordSet::default());
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| self.csv_error(e))?;
            if record.len() > headers.len() {
                return Err(StoreError::TooManyFields {
                    path: self.path.clone(),
                    line: record.position().map_or(0, csv::Position::line),
                    found: record.len(),
                    expected: headers.len(),
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "read record store");
        Ok(RecordSet::new(headers, rows))
    }

    /// Appends one entry.
    ///
    /// With `ensure_header`, a missing or empty file gets the header row
    /// first. The parent directory is created if needed.
    pub fn append(&self, entry: &MoodEntry, ensure_header: bool) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let write_header = ensure_header && self.is_empty()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        // The header row comes from the entry's field names.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(entry).map_err(|e| self.csv_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            mood = %entry.mood,
            timestamp = %entry.stored_timestamp(),
            "appended mood entry"
        );
        Ok(())
    }
}
