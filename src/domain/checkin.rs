//! Mood check-in record

use crate::domain::menu::menu_choice;
use chrono::NaiveDateTime;

/// Timestamp format written to the check-in log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Mood levels offered on check-in
pub const MOOD_LEVELS: &[&str] = &["Awesome!", "Good", "Fine", "Bad", "Terrible"];

/// One entry in the mood check-in log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub timestamp: NaiveDateTime,
    pub mood: String,
    pub emotions: Vec<String>,
    pub location: String,
    pub note: String,
}

impl CheckIn {
    pub fn new(timestamp: NaiveDateTime, mood: impl Into<String>) -> Self {
        CheckIn {
            timestamp,
            mood: mood.into(),
            emotions: Vec::new(),
            location: String::new(),
            note: String::new(),
        }
    }

    /// Add emotions, ignoring blanks and duplicates
    pub fn with_emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for emotion in emotions {
            let emotion = emotion.as_ref().trim();
            if !emotion.is_empty() && !self.emotions.iter().any(|e| e == emotion) {
                self.emotions.push(emotion.to_string());
            }
        }
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// Map a menu choice (1-5) or a mood name onto a mood level.
///
/// Unknown choices fall back to "Fine".
pub fn mood_level(choice: &str) -> &'static str {
    menu_choice(MOOD_LEVELS, choice).unwrap_or("Fine")
}
