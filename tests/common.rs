#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use ccub::models::{Assembly, BuildLogEntry, TimePeriod};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).expect("valid time")
}

pub fn closed(start: &str, end: &str, minutes: i64) -> TimePeriod {
    TimePeriod::closed(start.to_string(), end.to_string(), minutes)
}

pub fn entry(assembly: Assembly, date: NaiveDate, periods: Vec<TimePeriod>) -> BuildLogEntry {
    BuildLogEntry::new(assembly, date, periods)
}

/// Isolated HOME + working directory for driving the binary.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// The binary, run inside the workspace with a no-op editor.
    pub fn ccub(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ccub");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("EDITOR", "true")
            .env_remove("CCUB_LOG");
        cmd
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.path().join("log").join("buildlog.yaml")
    }

    pub fn details_file(&self, month: &str, day: &str) -> PathBuf {
        self.dir
            .path()
            .join("log")
            .join(month)
            .join(format!("{day}.md"))
    }
}
