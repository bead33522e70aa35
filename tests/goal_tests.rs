//! Integration tests for goal commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init, questlog_at};

#[test]
fn test_create_and_list() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["goal", "create", "simple", "-n", "Marathon", "-d", "Run a marathon", "-p", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal 1"));

    questlog_at(temp.path())
        .args(["goal", "create", "checklist", "-n", "Temple", "-d", "Attend", "-p", "50"])
        .args(["--target", "3", "--bonus", "500"])
        .assert()
        .success();

    questlog_at(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Marathon (Run a marathon)"))
        .stdout(predicate::str::contains("2. [ ] Temple (Attend) -- Completed 0/3 times"));

    let content = fs::read_to_string(temp.path().join("goals.txt")).unwrap();
    assert!(content.contains("ChecklistGoal:Temple,Attend,50,500,3,0"));
}

#[test]
fn test_record_updates_score() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["goal", "create", "eternal", "-n", "Pray", "-d", "Daily", "-p", "10"])
        .assert()
        .success();

    questlog_at(temp.path())
        .args(["goal", "record", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+10 points"))
        .stdout(predicate::str::contains("Streak: 1"));

    questlog_at(temp.path())
        .args(["goal", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 10"))
        .stdout(predicate::str::contains("Goals: 1 (0 complete)"));
}

#[test]
fn test_simple_goal_completes_once() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["goal", "create", "simple", "-n", "Move", "-d", "New flat", "-p", "20"])
        .assert()
        .success();
    questlog_at(temp.path()).args(["goal", "record", "1"]).assert().success();

    questlog_at(temp.path())
        .args(["goal", "record", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already complete"));

    questlog_at(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [X] Move"));
}

#[test]
fn test_invalid_goal_number() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["goal", "record", "4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("questlog goal list"));
}

#[test]
fn test_invalid_goal_type_and_name() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    questlog_at(temp.path())
        .args(["goal", "create", "weekly", "-n", "Run", "-p", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid goal type"));

    questlog_at(temp.path())
        .args(["goal", "create", "simple", "-n", "Run:fast", "-p", "1"])
        .assert()
        .code(3);

    assert!(!temp.path().join("goals.txt").exists());
}

#[test]
fn test_malformed_goal_line_is_skipped() {
    let temp = TempDir::new().unwrap();
    init(temp.path());
    fs::write(
        temp.path().join("goals.txt"),
        "30\n1\n2025-01-01\nWeeklyGoal:Odd,x,1\nEternalGoal:Pray,Daily,10\n",
    )
    .unwrap();

    questlog_at(temp.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Pray (Daily)"))
        .stderr(predicate::str::contains("line 4"));
}

#[test]
fn test_truncated_goals_file_recovers() {
    let temp = TempDir::new().unwrap();
    init(temp.path());
    fs::write(temp.path().join("goals.txt"), "30\n1\n").unwrap();

    questlog_at(temp.path())
        .args(["goal", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 30"))
        .stderr(predicate::str::contains("header is incomplete"));

    questlog_at(temp.path())
        .args(["goal", "create", "eternal", "-n", "Pray", "-p", "10"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("goals.txt")).unwrap();
    assert_eq!(content, "30\n1\nnever\nEternalGoal:Pray,,10\n");
}
