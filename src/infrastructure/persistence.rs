//! Flat-file persistence
//!
//! [`FlatFile`] binds a path to a [`Codec`]. The fallible `try_*` methods
//! return errors; `load`, `save` and `append` turn every failure into a
//! report so the caller keeps running with whatever state it had.

use crate::domain::format::{AppendCodec, Codec, Decoded, Skipped};
use crate::error::{QuestlogError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of [`FlatFile::load`]
#[derive(Debug)]
pub enum LoadReport {
    /// No file at the path; nothing was changed
    Missing,
    /// The target was replaced with the file's records
    Loaded {
        records: usize,
        skipped: Vec<Skipped>,
    },
    /// Reading or decoding failed; the target was left untouched
    Failed(QuestlogError),
}

impl LoadReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadReport::Failed(_))
    }

    /// User-facing summary
    pub fn message(&self, path: &Path) -> String {
        match self {
            LoadReport::Missing => format!("No file at {}; starting empty", path.display()),
            LoadReport::Loaded { records, skipped } if skipped.is_empty() => {
                format!("Loaded {} record(s) from {}", records, path.display())
            }
            LoadReport::Loaded { records, skipped } => format!(
                "Loaded {} record(s) from {} ({} unreadable line(s) skipped)",
                records,
                path.display(),
                skipped.len()
            ),
            LoadReport::Failed(e) => format!("Error loading {}: {}", path.display(), e),
        }
    }
}

/// Outcome of [`FlatFile::save`] and [`FlatFile::append`]
#[derive(Debug)]
pub enum SaveReport {
    Saved { records: usize },
    Failed(QuestlogError),
}

impl SaveReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveReport::Failed(_))
    }

    /// Convert back into a `Result` for callers that propagate errors
    pub fn into_result(self) -> Result<usize> {
        match self {
            SaveReport::Saved { records } => Ok(records),
            SaveReport::Failed(e) => Err(e),
        }
    }

    /// User-facing summary
    pub fn message(&self, path: &Path) -> String {
        match self {
            SaveReport::Saved { records } => {
                format!("Saved {} record(s) to {}", records, path.display())
            }
            SaveReport::Failed(e) => format!("Error saving {}: {}", path.display(), e),
        }
    }
}

/// A flat text file holding one codec's value
#[derive(Debug, Clone)]
pub struct FlatFile<C> {
    path: PathBuf,
    codec: C,
}

impl<C: Codec> FlatFile<C> {
    pub fn new(path: impl Into<PathBuf>, codec: C) -> Self {
        FlatFile {
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuestlogError::FileNotFound(self.path.clone())
            } else {
                QuestlogError::Io(e)
            }
        })
    }

    /// Read and decode the file
    pub fn try_load(&self) -> Result<Decoded<C::Value>> {
        let text = self.read()?;
        Ok(self.codec.decode(&text)?)
    }

    /// Replace `target` with the file's contents; never fails
    pub fn load(&self, target: &mut C::Value) -> LoadReport {
        match self.try_load() {
            Ok(decoded) => {
                for skipped in &decoded.skipped {
                    warn!(path = %self.path.display(), "skipped {}", skipped);
                }
                debug!(
                    path = %self.path.display(),
                    records = decoded.records,
                    "loaded"
                );
                *target = decoded.value;
                LoadReport::Loaded {
                    records: decoded.records,
                    skipped: decoded.skipped,
                }
            }
            Err(QuestlogError::FileNotFound(_)) => {
                debug!(path = %self.path.display(), "no file, nothing loaded");
                LoadReport::Missing
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "load failed");
                LoadReport::Failed(e)
            }
        }
    }

    /// Encode and write the whole value, replacing the file
    pub fn try_save(&self, value: &C::Value) -> Result<usize> {
        let text = self.codec.encode(value);
        atomic_write(&self.path, text.as_bytes())?;
        Ok(self.codec.count(value))
    }

    /// Save the value; never fails
    pub fn save(&self, value: &C::Value) -> SaveReport {
        match self.try_save(value) {
            Ok(records) => {
                debug!(path = %self.path.display(), records, "saved");
                SaveReport::Saved { records }
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "save failed");
                SaveReport::Failed(e)
            }
        }
    }
}

impl<C: AppendCodec> FlatFile<C> {
    /// Append one record to the end of the file, creating it if needed
    pub fn try_append(&self, record: &C::Record) -> Result<()> {
        ensure_parent(&self.path)?;
        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&self.path)?;
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        file.write_all(self.codec.encode_record(record).as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Append one record; never fails
    pub fn append(&self, record: &C::Record) -> SaveReport {
        match self.try_append(record) {
            Ok(()) => {
                debug!(path = %self.path.display(), "appended");
                SaveReport::Saved { records: 1 }
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "append failed");
                SaveReport::Failed(e)
            }
        }
    }
}

/// True for an empty file or one whose last byte is a newline
fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write to a temp file in the same directory, then rename into place
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    ensure_parent(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    temp_file.write_all(data)?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .map_err(|e| QuestlogError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::{CheckInCodec, GoalCodec, JournalCodec};
    use crate::domain::{CheckIn, Goal, GoalBook, JournalEntry, Store};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entry(day: u32, text: &str) -> JournalEntry {
        JournalEntry::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            "7:00 PM",
            "Calm",
            "What went well?",
            text,
        )
    }

    #[test]
    fn test_load_missing_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let file = FlatFile::new(temp.path().join("absent.txt"), JournalCodec);

        let mut store = Store::new();
        let report = file.load(&mut store);

        assert!(matches!(report, LoadReport::Missing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_empty_file_yields_no_records() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let mut store = Store::from(vec![entry(1, "stale")]);
        let report = FlatFile::new(&path, JournalCodec).load(&mut store);

        assert!(matches!(report, LoadReport::Loaded { records: 0, .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let file = FlatFile::new(temp.path().join("journal.txt"), JournalCodec);

        let store: Store<JournalEntry> = (1..=5).map(|d| entry(d, &format!("day {}", d))).collect();
        let report = file.save(&store);
        assert!(matches!(report, SaveReport::Saved { records: 5 }));

        let mut loaded = Store::new();
        file.load(&mut loaded);
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = FlatFile::new(temp.path().join("journal.txt"), JournalCodec);

        file.save(&Store::from(vec![entry(1, "a"), entry(2, "b")]));
        file.save(&Store::from(vec![entry(3, "c")]));

        let decoded = file.try_load().unwrap();
        assert_eq!(decoded.records, 1);
        assert_eq!(decoded.value.all()[0].text, "c");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("deep").join("goals.txt");
        let file = FlatFile::new(&path, GoalCodec);

        let mut book = GoalBook::new();
        book.add(Goal::eternal("Walk", "Evening walk", 5)).unwrap();
        file.try_save(&book).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_load_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("goals.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let mut book = GoalBook::new();
        book.add(Goal::simple("Keep", "me", 1)).unwrap();
        let before = book.clone();

        let report = FlatFile::new(&path, GoalCodec).load(&mut book);
        assert!(report.is_failed());
        assert!(report.message(&path).starts_with("Error loading"));
        assert_eq!(book, before);
    }

    #[test]
    fn test_save_to_directory_path_fails_without_panic() {
        let temp = TempDir::new().unwrap();
        let file = FlatFile::new(temp.path(), JournalCodec);

        let report = file.save(&Store::from(vec![entry(1, "x")]));
        assert!(report.is_failed());
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_append_accumulates_records() {
        let temp = TempDir::new().unwrap();
        let file = FlatFile::new(temp.path().join("mood_notes.txt"), CheckInCodec);
        let at = NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        file.try_append(&CheckIn::new(at, "Good")).unwrap();
        file.try_append(&CheckIn::new(at, "Bad")).unwrap();

        let decoded = file.try_load().unwrap();
        let moods: Vec<&str> = decoded.value.iter().map(|c| c.mood.as_str()).collect();
        assert_eq!(moods, vec!["Good", "Bad"]);
    }

    #[test]
    fn test_append_after_missing_final_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mood_notes.txt");
        fs::write(&path, "Timestamp: 2025-04-01 09:00:00\nMood: Good\n---").unwrap();
        let file = FlatFile::new(&path, CheckInCodec);
        let at = NaiveDate::from_ymd_opt(2025, 4, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        file.try_append(&CheckIn::new(at, "Bad")).unwrap();

        let decoded = file.try_load().unwrap();
        assert_eq!(decoded.records, 2);
        assert!(decoded.skipped.is_empty());
        assert_eq!(decoded.value.all()[1].mood, "Bad");
    }

    #[test]
    fn test_load_reports_skipped_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.txt");
        fs::write(
            &path,
            "=== Journal Entry ===\nEntry: no date\n\n=== Journal Entry ===\nDate: 02/01/2025\nEntry: ok\n",
        )
        .unwrap();

        let mut store = Store::new();
        let report = FlatFile::new(&path, JournalCodec).load(&mut store);

        assert_eq!(store.len(), 1);
        assert!(report.message(&path).contains("1 unreadable line(s) skipped"));
    }
}
