//! Config management use case

use crate::error::{QuestlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, QuestlogRepository};

const KEYS: &str = "journal_file, goals_file, profile_file, checkin_file, foods_file, \
                    meals_file, metrics_file, routes_file, exercise_file, created";

/// Service for managing questlog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "journal_file" => Ok(config.journal_file),
            "goals_file" => Ok(config.goals_file),
            "profile_file" => Ok(config.profile_file),
            "checkin_file" => Ok(config.checkin_file),
            "foods_file" => Ok(config.foods_file),
            "meals_file" => Ok(config.meals_file),
            "metrics_file" => Ok(config.metrics_file),
            "routes_file" => Ok(config.routes_file),
            "exercise_file" => Ok(config.exercise_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuestlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let value = value.trim();

        let slot = match key {
            "journal_file" => &mut config.journal_file,
            "goals_file" => &mut config.goals_file,
            "profile_file" => &mut config.profile_file,
            "checkin_file" => &mut config.checkin_file,
            "foods_file" => &mut config.foods_file,
            "meals_file" => &mut config.meals_file,
            "metrics_file" => &mut config.metrics_file,
            "routes_file" => &mut config.routes_file,
            "exercise_file" => &mut config.exercise_file,
            "created" => {
                return Err(QuestlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuestlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        };

        if value.is_empty() {
            return Err(QuestlogError::InvalidInput(format!(
                "'{}' cannot be empty",
                key
            )));
        }
        *slot = value.to_string();

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = setup();
        assert_eq!(service.get("journal_file").unwrap(), "myjournal.txt");
        assert_eq!(service.get("checkin_file").unwrap(), "mood_notes.txt");
        assert_eq!(service.get("routes_file").unwrap(), "routes.txt");
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_set_persists() {
        let (_temp, service) = setup();
        service.set("goals_file", "quests.txt").unwrap();
        assert_eq!(service.get("goals_file").unwrap(), "quests.txt");
        assert_eq!(service.list().unwrap().goals_file, "quests.txt");

        service.set("meals_file", "food/meals.txt").unwrap();
        assert_eq!(service.get("meals_file").unwrap(), "food/meals.txt");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = setup();
        let err = service.set("created", "2020-01-01").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = setup();
        assert!(service
            .get("editor")
            .unwrap_err()
            .to_string()
            .contains("Unknown config key"));
        assert!(service.set("editor", "vim").is_err());
    }

    #[test]
    fn test_empty_value_rejected() {
        let (_temp, service) = setup();
        assert!(matches!(
            service.set("journal_file", "  "),
            Err(QuestlogError::InvalidInput(_))
        ));
    }
}
