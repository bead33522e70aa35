//! Journal use cases

use crate::domain::entry::TIME_FORMAT;
use crate::domain::format::journal::LAYOUT;
use crate::domain::{JournalEntry, MoodContext, Store};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, LoadReport, QuestlogRepository};
use chrono::NaiveDateTime;
use tracing::info;

/// Input for a new journal entry
#[derive(Debug, Clone, Default)]
pub struct WriteEntry {
    pub text: String,
    pub mood: Option<String>,
    pub prompt: Option<String>,
    /// Journal file name overriding the configured one
    pub file: Option<String>,
}

/// Service for writing and reading journal entries
pub struct JournalService {
    repository: FileSystemRepository,
}

impl JournalService {
    pub fn new(repository: FileSystemRepository) -> Self {
        JournalService { repository }
    }

    /// Load the journal; an unreadable file aborts the operation
    pub fn entries(&self, file: Option<&str>) -> Result<Store<JournalEntry>> {
        let config = self.repository.load_config()?;
        let journal = self.repository.journal_file(&config, file);

        let mut store = Store::new();
        if let LoadReport::Failed(e) = journal.load(&mut store) {
            return Err(e);
        }
        Ok(store)
    }

    /// Append a new entry stamped with `now` and save the journal.
    ///
    /// Without an explicit mood the mood already recorded today is reused.
    pub fn write(&self, request: &WriteEntry, now: NaiveDateTime) -> Result<JournalEntry> {
        // Blank lines and indentation do not survive a reload
        let text = request
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if text.is_empty() {
            return Err(QuestlogError::InvalidInput(
                "Entry text cannot be empty".to_string(),
            ));
        }
        if let Some(line) = text.lines().skip(1).find(|l| LAYOUT.is_reserved_line(l)) {
            return Err(QuestlogError::InvalidInput(format!(
                "Entry line would be read back as a label: '{}'",
                line.trim()
            )));
        }
        let prompt = request.prompt.as_deref().unwrap_or("").trim();
        let single_line = [Some(prompt), request.mood.as_deref()]
            .into_iter()
            .flatten()
            .all(|value| !value.contains(['\n', '\r']));
        if !single_line {
            return Err(QuestlogError::InvalidInput(
                "Prompt and mood must be a single line".to_string(),
            ));
        }

        let config = self.repository.load_config()?;
        let journal = self.repository.journal_file(&config, request.file.as_deref());

        let mut store = Store::new();
        if let LoadReport::Failed(e) = journal.load(&mut store) {
            return Err(e);
        }

        let today = now.date();
        let mut mood_context = MoodContext::from_entries(store.all());
        let mood = mood_context
            .resolve(today, request.mood.as_deref())
            .ok_or_else(|| {
                QuestlogError::InvalidInput(
                    "No mood recorded for today; the first entry of a day needs a mood"
                        .to_string(),
                )
            })?;

        let entry = JournalEntry::new(
            today,
            now.format(TIME_FORMAT).to_string(),
            mood,
            prompt,
            text.as_str(),
        );
        store.add(entry.clone());
        journal.save(&store).into_result()?;

        info!(entries = store.len(), "journal entry added");
        Ok(entry)
    }
}
