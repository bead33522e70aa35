//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod persistence;
pub mod repository;

pub use config::Config;
pub use persistence::{FlatFile, LoadReport, SaveReport};
pub use repository::{FileSystemRepository, QuestlogRepository};
