//! Integration tests for journal commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init, questlog_at};

#[test]
fn test_write_and_show() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["journal", "write", "--mood", "Happy", "--prompt", "Best part of today?"])
        .args(["--entry", "Lunch with family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mood: Happy"));

    questlog_at(temp.path())
        .args(["journal", "write", "--entry", "Quiet evening"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mood: Happy"));

    let content = fs::read_to_string(temp.path().join("myjournal.txt")).unwrap();
    assert_eq!(content.matches("=== Journal Entry ===").count(), 2);
    assert!(content.contains("Entry: Lunch with family"));

    let output = questlog_at(temp.path())
        .args(["journal", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("=== Journal Entry ===").count(), 1);
    assert_eq!(output.matches("Mood: Happy").count(), 1);
    assert!(output.contains("Prompt: Best part of today?"));
    assert!(output.contains("Entry: Quiet evening"));
}

#[test]
fn test_first_entry_without_mood_fails() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["journal", "write", "--entry", "No mood yet"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--mood"));

    assert!(!temp.path().join("myjournal.txt").exists());
}

#[test]
fn test_show_empty_journal() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["journal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries to display"));
}

#[test]
fn test_show_skips_malformed_records() {
    let temp = TempDir::new().unwrap();
    init(temp.path());
    fs::write(
        temp.path().join("myjournal.txt"),
        "=== Journal Entry ===\nDate: 31/02/2025\nEntry: impossible date\n\n\
         === Journal Entry ===\nDate: 01/01/2025\nMood: Happy\nEntry: Today was good\n",
    )
    .unwrap();

    questlog_at(temp.path())
        .args(["journal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry: Today was good"))
        .stdout(predicate::str::contains("impossible date").not())
        .stderr(predicate::str::contains("skipped"));
}

#[test]
fn test_alternate_journal_file() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["journal", "write", "-f", "trip.txt", "-m", "Excited", "-e", "Packed bags"])
        .assert()
        .success();

    assert!(temp.path().join("trip.txt").exists());

    questlog_at(temp.path())
        .args(["journal", "show", "--file", "trip.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packed bags"));
}
