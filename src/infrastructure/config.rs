//! Configuration management

use crate::error::{QuestlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding questlog metadata inside a questlog root
pub const META_DIR: &str = ".questlog";
const CONFIG_FILE: &str = "config.toml";

fn default_journal_file() -> String {
    "myjournal.txt".to_string()
}

fn default_goals_file() -> String {
    "goals.txt".to_string()
}

fn default_profile_file() -> String {
    "user_profile.txt".to_string()
}

fn default_checkin_file() -> String {
    "mood_notes.txt".to_string()
}

fn default_foods_file() -> String {
    "foods.txt".to_string()
}

fn default_meals_file() -> String {
    "meal_history.txt".to_string()
}

fn default_metrics_file() -> String {
    "metrics_history.txt".to_string()
}

fn default_routes_file() -> String {
    "routes.txt".to_string()
}

fn default_exercise_file() -> String {
    "exercise_history.txt".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_journal_file")]
    pub journal_file: String,
    #[serde(default = "default_goals_file")]
    pub goals_file: String,
    #[serde(default = "default_profile_file")]
    pub profile_file: String,
    #[serde(default = "default_checkin_file")]
    pub checkin_file: String,
    #[serde(default = "default_foods_file")]
    pub foods_file: String,
    #[serde(default = "default_meals_file")]
    pub meals_file: String,
    #[serde(default = "default_metrics_file")]
    pub metrics_file: String,
    #[serde(default = "default_routes_file")]
    pub routes_file: String,
    #[serde(default = "default_exercise_file")]
    pub exercise_file: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default file names
    pub fn new() -> Self {
        Config {
            journal_file: default_journal_file(),
            goals_file: default_goals_file(),
            profile_file: default_profile_file(),
            checkin_file: default_checkin_file(),
            foods_file: default_foods_file(),
            meals_file: default_meals_file(),
            metrics_file: default_metrics_file(),
            routes_file: default_routes_file(),
            exercise_file: default_exercise_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .questlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuestlogError::NotQuestlogDirectory(path.to_path_buf())
            } else {
                QuestlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuestlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .questlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join(CONFIG_FILE);

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
