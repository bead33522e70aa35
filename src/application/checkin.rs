//! Mood check-in use cases

use crate::domain::checkin::mood_level;
use crate::domain::{CheckIn, Store};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, LoadReport, QuestlogRepository};
use chrono::NaiveDateTime;
use tracing::info;

/// Input for a check-in
#[derive(Debug, Clone, Default)]
pub struct NewCheckIn {
    /// Menu number (1-5) or mood name
    pub mood: String,
    pub emotions: Vec<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

/// Service for the append-only check-in log
pub struct CheckInService {
    repository: FileSystemRepository,
}

impl CheckInService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckInService { repository }
    }

    /// Append one check-in stamped with `now`
    pub fn record(&self, request: &NewCheckIn, now: NaiveDateTime) -> Result<CheckIn> {
        let fields = request
            .emotions
            .iter()
            .map(String::as_str)
            .chain(request.location.as_deref())
            .chain(request.note.as_deref());
        for value in fields {
            if value.contains(['\n', '\r']) {
                return Err(QuestlogError::InvalidInput(
                    "Check-in fields must be a single line".to_string(),
                ));
            }
        }

        let checkin = CheckIn::new(now, mood_level(&request.mood))
            .with_emotions(&request.emotions)
            .with_location(request.location.as_deref().unwrap_or("").trim())
            .with_note(request.note.as_deref().unwrap_or("").trim());

        let config = self.repository.load_config()?;
        self.repository
            .checkin_file(&config)
            .append(&checkin)
            .into_result()?;

        info!(mood = %checkin.mood, "check-in recorded");
        Ok(checkin)
    }

    /// All check-ins in the order they were recorded
    pub fn history(&self) -> Result<Store<CheckIn>> {
        let config = self.repository.load_config()?;
        let mut store = Store::new();
        if let LoadReport::Failed(e) = self.repository.checkin_file(&config).load(&mut store) {
            return Err(e);
        }
        Ok(store)
    }
}
