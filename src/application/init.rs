//! Initialize questlog use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, QuestlogRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new questlog directory at the specified path.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    info!(root = %path.display(), "initialized");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_meta_dir_and_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("log");

        let config = init(&root).unwrap();

        assert!(root.join(".questlog/config.toml").exists());
        assert_eq!(Config::load_from_dir(&root).unwrap(), config);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
