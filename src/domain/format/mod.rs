//! Flat-file serializers
//!
//! Every persisted file is handled by a [`Codec`] that turns an in-memory
//! value into text and back. Decoding is lenient: a record that cannot be
//! read is reported in [`Decoded::skipped`] and parsing continues with the
//! next one.

pub mod block;
pub mod checkin;
pub mod delimited;
pub mod exercise;
pub mod goals;
pub mod journal;
pub mod meal;
pub mod metric;
pub mod profile;

pub use block::{BlockLayout, BlockRecord, Boundary, LabeledBlock};
pub use checkin::CheckInCodec;
pub use delimited::{DelimitedRecord, LineCodec};
pub use exercise::{ExerciseCodec, RouteCodec};
pub use goals::GoalCodec;
pub use journal::JournalCodec;
pub use meal::{FoodCodec, MealCodec};
pub use metric::MetricCodec;
pub use profile::ProfileCodec;

use crate::domain::checkin::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use std::fmt;
use thiserror::Error;

/// Errors raised while reading a serialized record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing required label '{0}'")]
    MissingLabel(String),

    #[error("invalid value for '{field}': '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("file ends after {0} line(s), header is incomplete")]
    Truncated(usize),

    #[error("no record found")]
    Empty,
}

impl FormatError {
    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        FormatError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// A record or line that was dropped while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// 1-based line number where the dropped content starts
    pub line: usize,
    pub reason: String,
}

impl Skipped {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Skipped {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Result of decoding a whole file
#[derive(Debug)]
pub struct Decoded<T> {
    pub value: T,
    /// Number of records that were read successfully
    pub records: usize,
    pub skipped: Vec<Skipped>,
}

/// Converts a whole persisted value to and from its text form
pub trait Codec {
    type Value;

    /// Render the value as file contents
    fn encode(&self, value: &Self::Value) -> String;

    /// Parse file contents, skipping unreadable records
    fn decode(&self, text: &str) -> Result<Decoded<Self::Value>, FormatError>;

    /// Number of records held by a value
    fn count(&self, value: &Self::Value) -> usize;
}

/// A codec whose records can be appended to an existing file one at a time
pub trait AppendCodec: Codec {
    type Record;

    fn encode_record(&self, record: &Self::Record) -> String;
}

/// Split a list field joined with `sep`, dropping empty items
pub(crate) fn split_list(value: &str, sep: char) -> Vec<String> {
    value
        .split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a log timestamp; older files use the US long form
pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    [TIMESTAMP_FORMAT, "%m/%d/%Y %I:%M:%S %p", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Parse a boolean written as `true`/`false` in any case
pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool, FormatError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FormatError::invalid(field, value)),
    }
}
