#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn questlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("questlog").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `questlog --root <root>` ready for a subcommand
pub fn questlog_at(root: &Path) -> Command {
    let mut cmd = questlog_cmd();
    cmd.arg("--root").arg(root);
    cmd
}

pub fn init(root: &Path) {
    questlog_cmd().arg("init").arg(root).assert().success();
}
