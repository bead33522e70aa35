//! File system repository

use crate::domain::format::{
    CheckInCodec, ExerciseCodec, FoodCodec, GoalCodec, JournalCodec, MealCodec, MetricCodec,
    ProfileCodec, RouteCodec,
};
use crate::error::{QuestlogError, Result};
use crate::infrastructure::config::META_DIR;
use crate::infrastructure::{Config, FlatFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for questlog operations
pub trait QuestlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .questlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .questlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .questlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .questlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of QuestlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Open an explicit root, or discover one by walking up from the
    /// current directory
    pub fn open(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(path) => {
                if Self::has_meta_dir(path) {
                    Ok(FileSystemRepository::new(path.to_path_buf()))
                } else {
                    Err(QuestlogError::NotQuestlogDirectory(path.to_path_buf()))
                }
            }
            None => {
                let current_dir = std::env::current_dir()?;
                Self::discover_from(&current_dir)
            }
        }
    }

    /// Discover questlog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuestlogError::NotQuestlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Resolve a file name from the config against the root
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Journal file; `file` overrides the configured name
    pub fn journal_file(&self, config: &Config, file: Option<&str>) -> FlatFile<JournalCodec> {
        FlatFile::new(
            self.resolve(file.unwrap_or(&config.journal_file)),
            JournalCodec,
        )
    }

    /// Goals file; `file` overrides the configured name
    pub fn goals_file(&self, config: &Config, file: Option<&str>) -> FlatFile<GoalCodec> {
        FlatFile::new(self.resolve(file.unwrap_or(&config.goals_file)), GoalCodec)
    }

    pub fn profile_file(&self, config: &Config) -> FlatFile<ProfileCodec> {
        FlatFile::new(self.resolve(&config.profile_file), ProfileCodec)
    }

    pub fn checkin_file(&self, config: &Config) -> FlatFile<CheckInCodec> {
        FlatFile::new(self.resolve(&config.checkin_file), CheckInCodec)
    }

    pub fn foods_file(&self, config: &Config) -> FlatFile<FoodCodec> {
        FlatFile::new(self.resolve(&config.foods_file), FoodCodec::new())
    }

    pub fn meals_file(&self, config: &Config) -> FlatFile<MealCodec> {
        FlatFile::new(self.resolve(&config.meals_file), MealCodec::new())
    }

    pub fn metrics_file(&self, config: &Config) -> FlatFile<MetricCodec> {
        FlatFile::new(self.resolve(&config.metrics_file), MetricCodec::new())
    }

    pub fn routes_file(&self, config: &Config) -> FlatFile<RouteCodec> {
        FlatFile::new(self.resolve(&config.routes_file), RouteCodec::new())
    }

    pub fn exercise_file(&self, config: &Config) -> FlatFile<ExerciseCodec> {
        FlatFile::new(self.resolve(&config.exercise_file), ExerciseCodec::new())
    }
}

impl QuestlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(QuestlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".questlog")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_meta_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            QuestlogError::NotQuestlogDirectory(_) => {}
            other => panic!("Expected NotQuestlogDirectory error, got {}", other),
        }
    }

    #[test]
    fn test_open_explicit_root() {
        let temp = TempDir::new().unwrap();
        assert!(FileSystemRepository::open(Some(temp.path())).is_err());

        fs::create_dir(temp.path().join(".questlog")).unwrap();
        let repo = FileSystemRepository::open(Some(temp.path())).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_file_paths_follow_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let mut config = Config::new();
        config.goals_file = "quests/goals.txt".to_string();

        assert_eq!(
            repo.journal_file(&config, None).path(),
            temp.path().join("myjournal.txt")
        );
        assert_eq!(
            repo.journal_file(&config, Some("other.txt")).path(),
            temp.path().join("other.txt")
        );
        assert_eq!(
            repo.goals_file(&config, None).path(),
            temp.path().join("quests/goals.txt")
        );
        assert_eq!(
            repo.checkin_file(&config).path(),
            temp.path().join("mood_notes.txt")
        );
        assert_eq!(
            repo.meals_file(&config).path(),
            temp.path().join("meal_history.txt")
        );
        assert_eq!(
            repo.exercise_file(&config).path(),
            temp.path().join("exercise_history.txt")
        );
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded, config);
    }
}
