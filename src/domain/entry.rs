//! Journal entry record

use chrono::{NaiveDate, NaiveTime};

/// Date format written to journal files (e.g. 17/01/2025)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Time format for newly written entries (e.g. 3:45 PM)
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    /// Time of day as it was recorded; kept verbatim
    pub time: String,
    pub mood: String,
    pub prompt: String,
    /// Free text, may span several lines
    pub text: String,
}

impl JournalEntry {
    pub fn new(
        date: NaiveDate,
        time: impl Into<String>,
        mood: impl Into<String>,
        prompt: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        JournalEntry {
            date,
            time: time.into(),
            mood: mood.into(),
            prompt: prompt.into(),
            text: text.into(),
        }
    }

    /// Parsed time of day, if the recorded time is in a known format
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        let time = self.time.trim();
        ["%I:%M %p", "%H:%M", "%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
    }
}

/// Parse a journal date, accepting the written format and ISO dates
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
