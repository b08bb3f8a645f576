//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a pinned "today"
//! - Reservation fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The date every command in these tests is evaluated on.
pub const TODAY: &str = "2025-01-12";

/// Environment variables the binary reads; cleared so the host cannot leak in.
const RESORT_VARS: [&str; 7] = [
    "RESORT_DATA_DIR",
    "RESORT_TODAY",
    "RESORT_OPERATOR",
    "RESORT_SECRET",
    "RESORT_CURRENCY",
    "RESORT_OUTPUT_FORMAT",
    "RESORT_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the resort data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; the binary creates it on the
    /// first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("resort-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("resort").expect("Failed to find resort binary");
        for var in RESORT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory and date pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--today")
            .arg(TODAY);
        cmd
    }

    /// Path of the snapshot file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("reservations.db")
    }

    /// Writes `config.yaml` into the data directory.
    pub fn write_config(&self, yaml: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Data directory path.
    pub fn path(&self) -> &Path {
        &self.data_dir
    }

    /// Create a reservation, asserting success.
    pub fn create(&self, id: &str, name: &str, room: &str, check_in: &str, check_out: &str) {
        self.command()
            .args(["create", "--id", id, "--name", name, "--contact", "0771234567"])
            .args(["--room", room, "--check-in", check_in, "--check-out", check_out])
            .assert()
            .success();
    }

    /// Creates the three standard fixtures.
    ///
    /// On [`TODAY`]: R1 is active, R2 upcoming and R3 completed.
    pub fn seed(&self) {
        self.create("R1", "Alice Perera", "single", "2025-01-10", "2025-01-15");
        self.create("R2", "Bob Silva", "suite", "2025-02-01", "2025-02-03");
        self.create("R3", "Carol Fernando", "double", "2025-01-01", "2025-01-05");
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// List all reservations and return stdout.
    pub fn list(&self) -> String {
        self.stdout(&["list"])
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
