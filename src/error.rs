//! Error types for questlog

use crate::domain::format::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for questlog application
#[derive(Debug, Error)]
pub enum QuestlogError {
    #[error("Not a questlog directory: {0}")]
    NotQuestlogDirectory(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Malformed data: {0}")]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuestlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuestlogError::NotQuestlogDirectory(_) => 2,
            QuestlogError::InvalidInput(_) => 3,
            QuestlogError::Format(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuestlogError::NotQuestlogDirectory(path) => {
                format!(
                    "Not a questlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'questlog init' in this directory to start a new log\n\
                    • Navigate to an existing questlog directory\n\
                    • Pass --root <DIR> to point at your questlog directory",
                    path.display()
                )
            }
            QuestlogError::InvalidInput(msg) => {
                if msg.contains("No mood recorded") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass the mood explicitly: questlog journal write --mood Happy --entry '...'\n\
                        • The first entry of each day must record a mood",
                        self
                    )
                } else if msg.contains("goal number") {
                    format!(
                        "{}\n\n\
                        Use 'questlog goal list' to see goal numbers",
                        self
                    )
                } else if msg.contains("food number") {
                    format!(
                        "{}\n\n\
                        Use 'questlog meal foods' to see food numbers",
                        self
                    )
                } else if msg.contains("route number") {
                    format!(
                        "{}\n\n\
                        Use 'questlog exercise routes' to see route numbers",
                        self
                    )
                } else {
                    self.to_string()
                }
            }
            QuestlogError::Format(err) => {
                format!(
                    "Malformed data: {}\n\n\
                    Suggestions:\n\
                    • Check the file for hand edits that removed a label or separator\n\
                    • Records that cannot be read are skipped; run with --verbose to see which",
                    err
                )
            }
            QuestlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: questlog config journal_file diary.txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuestlogError
pub type Result<T> = std::result::Result<T, QuestlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_questlog_directory_suggestion() {
        let err = QuestlogError::NotQuestlogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("questlog init"));
        assert!(msg.contains("--root"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_missing_mood_suggestion() {
        let err = QuestlogError::InvalidInput("No mood recorded for today".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--mood"));
    }

    #[test]
    fn test_goal_number_suggestion() {
        let err = QuestlogError::InvalidInput("Invalid goal number: 9".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("questlog goal list"));
    }

    #[test]
    fn test_food_and_route_number_suggestions() {
        let err = QuestlogError::InvalidInput("Invalid food number: 7".to_string());
        assert!(err.display_with_suggestions().contains("questlog meal foods"));

        let err = QuestlogError::InvalidInput("Invalid route number: 2".to_string());
        assert!(err.display_with_suggestions().contains("questlog exercise routes"));
    }

    #[test]
    fn test_format_error_suggestions() {
        let err = QuestlogError::Format(FormatError::MissingLabel("Date".to_string()));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Date"));
        assert!(msg.contains("--verbose"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            QuestlogError::NotQuestlogDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(QuestlogError::InvalidInput("x".to_string()).exit_code(), 3);
        assert_eq!(QuestlogError::Format(FormatError::Empty).exit_code(), 4);
        assert_eq!(QuestlogError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = QuestlogError::FileNotFound(PathBuf::from("goals.txt"));
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "File not found: goals.txt");
    }
}
