//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Format used when writing entry timestamps to the record store.
pub const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// The mood categories a user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Angry,
    Sad,
    Anxious,
    #[default]
    Neutral,
}

impl Mood {
    /// All categories, in the order they are offered to the user.
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Angry,
        Self::Sad,
        Self::Anxious,
        Self::Neutral,
    ];

    /// Name as written to the record store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Angry => "Angry",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

impl Serialize for Mood {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Error type for unknown mood strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mood: {} (expected one of Happy, Angry, Sad, Anxious, Neutral)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMood {}

/// A single logged mood entry.
///
/// Entries are immutable once appended to the record store. Serializing an
/// entry yields one store row, with field names matching the store header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEntry {
    /// When the entry was logged, in local time.
    #[serde(serialize_with = "serialize_stored_timestamp")]
    pub timestamp: NaiveDateTime,
    /// The mood category.
    pub mood: Mood,
    /// Why the user feels this way.
    pub reason: String,
}

impl MoodEntry {
    /// Creates a new entry after validating that the reason is not blank.
    pub fn new(
        timestamp: NaiveDateTime,
        mood: Mood,
        reason: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(ValidationError::Empty { field: "reason" });
        }
        Ok(Self {
            timestamp,
            mood,
            reason,
        })
    }

    /// The timestamp rendered the way the record store keeps it.
    pub fn stored_timestamp(&self) -> String {
        self.timestamp.format(STORED_TIMESTAMP_FORMAT).to_string()
    }
}

fn serialize_stored_timestamp<S>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(STORED_TIMESTAMP_FORMAT))
}
