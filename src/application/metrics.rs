//! Body metric use cases

use crate::domain::format::DelimitedRecord;
use crate::domain::menu::require_choice;
use crate::domain::metric::METRIC_KINDS;
use crate::domain::{MetricEntry, Store};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::{FileSystemRepository, LoadReport, QuestlogRepository};
use chrono::NaiveDateTime;
use tracing::info;

/// Service for the append-only body metrics log
pub struct MetricService {
    repository: FileSystemRepository,
}

impl MetricService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MetricService { repository }
    }

    /// Append one reading stamped with `now`
    pub fn log(&self, kind: &str, value: &str, now: NaiveDateTime) -> Result<MetricEntry> {
        let kind = require_choice("metric type", METRIC_KINDS, kind)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(QuestlogError::InvalidInput(
                "Reading cannot be empty".to_string(),
            ));
        }
        let entry = MetricEntry::new(now, kind, value);
        entry.check_fields()?;

        let config = self.repository.load_config()?;
        self.repository
            .metrics_file(&config)
            .append(&entry)
            .into_result()?;

        info!(kind, "reading logged");
        Ok(entry)
    }

    pub fn history(&self) -> Result<Store<MetricEntry>> {
        let config = self.repository.load_config()?;
        let mut store = Store::new();
        if let LoadReport::Failed(e) = self.repository.metrics_file(&config).load(&mut store) {
            return Err(e);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, MetricService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, MetricService::new(repo))
    }

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_log_readings() {
        let (temp, service) = setup();

        service.log("pressure", " 120/80 ", morning()).unwrap();
        let glucose = service.log("2", "95", morning()).unwrap();
        assert_eq!(glucose.kind, "Glucose");

        let history = service.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.all()[0].value, "120/80");

        let content = std::fs::read_to_string(temp.path().join("metrics_history.txt")).unwrap();
        assert_eq!(
            content,
            "2025-05-02 07:00:00,Pressure,120/80\n2025-05-02 07:00:00,Glucose,95\n"
        );
    }

    #[test]
    fn test_log_rejects_bad_readings() {
        let (temp, service) = setup();

        assert!(service.log("Weight", "70", morning()).is_err());
        assert!(service.log("Pressure", "", morning()).is_err());
        assert!(service.log("Pressure", "120,80", morning()).is_err());
        assert!(!temp.path().join("metrics_history.txt").exists());
    }

    #[test]
    fn test_history_missing_file_is_empty() {
        let (_temp, service) = setup();
        assert!(service.history().unwrap().is_empty());
    }
}
