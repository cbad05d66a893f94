#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn init_journal(path: &Path) {
    moodjour_cmd().arg("init").arg(path).assert().success();
}

pub fn write_entries(path: &Path, json: &str) {
    fs::write(path.join("entries.json"), json).unwrap();
}

pub fn write_tags(path: &Path, json: &str) {
    fs::write(path.join("tags.json"), json).unwrap();
}
