//! questlog - Journal, goals, profile and mood check-ins in plain text files
//!
//! Every kind of record is kept in a flat text file: a record type, a
//! serializer for its file format, an ordered in-memory store, and a
//! persistence layer that loads and saves the whole file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuestlogError;
