//! Once-a-day mood tracking

use crate::domain::JournalEntry;
use chrono::NaiveDate;

/// The most recently recorded mood and the day it was recorded
///
/// Passed explicitly to the write operation; a mood recorded today is reused
/// for every further entry written the same day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodContext {
    last: Option<(NaiveDate, String)>,
}

impl MoodContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the context from the last entry of a loaded journal
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let last = entries
            .last()
            .filter(|entry| !entry.mood.trim().is_empty())
            .map(|entry| (entry.date, entry.mood.clone()));
        MoodContext { last }
    }

    /// Mood already recorded for `today`, if any
    pub fn mood_for(&self, today: NaiveDate) -> Option<&str> {
        match &self.last {
            Some((date, mood)) if *date == today => Some(mood.as_str()),
            _ => None,
        }
    }

    pub fn record(&mut self, today: NaiveDate, mood: impl Into<String>) {
        self.last = Some((today, mood.into()));
    }

    /// Pick the mood for a new entry: an explicit mood wins, otherwise
    /// today's recorded mood is reused
    pub fn resolve(&mut self, today: NaiveDate, explicit: Option<&str>) -> Option<String> {
        let explicit = explicit.map(str::trim).filter(|m| !m.is_empty());
        match explicit {
            Some(mood) => {
                self.record(today, mood);
                Some(mood.to_string())
            }
            None => self.mood_for(today).map(str::to_string),
        }
    }
}
