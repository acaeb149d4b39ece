//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Future-date fixtures that keep bookings clear of the lead-time rule

use assert_cmd::Command;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the courtbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("courtbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("courtbook").expect("Failed to find courtbook binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Book a slot, expecting success.
    pub fn book(&self, name: &str, start: &str, minutes: u32) {
        self.command()
            .arg("book")
            .arg("--name")
            .arg(name)
            .arg("--start")
            .arg(start)
            .arg("--minutes")
            .arg(minutes.to_string())
            .arg("--decline")
            .assert()
            .success();
    }

    /// Print the schedule for a date range and return stdout.
    pub fn schedule(&self, from: &str, to: &str) -> String {
        let output = self
            .command()
            .arg("schedule")
            .arg("--from")
            .arg(from)
            .arg("--to")
            .arg(to)
            .output()
            .expect("Failed to run schedule command");

        assert!(
            output.status.success(),
            "Schedule failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a Monday at least two days in the future.
///
/// Booking everything on one future Monday keeps tests inside a single
/// calendar week (for the quota rule) and far enough ahead that the
/// lead-time rule never interferes, regardless of when the tests run.
#[allow(dead_code)]
pub fn future_monday() -> NaiveDate {
    let today = Local::now().date_naive();
    let mut day = today + Duration::days(1);
    while day.weekday() != Weekday::Mon {
        day += Duration::days(1);
    }
    if (day - today).num_days() < 2 {
        day += Duration::days(7);
    }
    day
}

/// Formats a date and time-of-day as CLI input (`DD.MM.YYYY HH:MM`).
#[allow(dead_code)]
pub fn stamp(date: NaiveDate, hour: u32, minute: u32) -> String {
    format!("{} {hour:02}:{minute:02}", date.format("%d.%m.%Y"))
}

/// Formats a date as CLI input (`DD.MM.YYYY`).
#[allow(dead_code)]
pub fn date_arg(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
