//! Test environment for isolated parklot runs.
//!
//! Every run gets its own working directory (where `parking_data.txt` and
//! `parklot.toml` live) and its own config home, so the developer's real
//! configuration never leaks into a test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

/// Result of running a parklot CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not NDJSON ({}): {}", e, l))
            })
            .collect()
    }
}

pub struct TestEnv {
    /// Working directory for every run
    pub project_root: TempDir,
    /// XDG config home for every run
    pub config_home: TempDir,
    parklot_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            config_home: tempfile::tempdir().expect("Failed to create config dir"),
            parklot_bin: PathBuf::from(env!("CARGO_BIN_EXE_parklot")),
        }
    }

    /// Start with `content` already in the default data file
    pub fn with_data(content: &str) -> Self {
        let env = Self::new();
        env.write_data(content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default data file location
    pub fn data_path(&self) -> PathBuf {
        self.project_path("parking_data.txt")
    }

    pub fn write_data(&self, content: &str) {
        std::fs::write(self.data_path(), content).expect("Failed to write data file");
    }

    pub fn read_data(&self) -> String {
        read_or_empty(&self.data_path())
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        read_or_empty(&self.project_path(relative_path))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.parklot_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("PARKLOT_COLOR", "never")
            .env("LANG", "C")
            .env_remove("PARKLOT_DATA_FILE")
            .env_remove("PARKLOT_VERBOSITY")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute parklot");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Current Unix time, for writing records "parked N seconds ago"
pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before 1970")
        .as_secs() as i64
}

/// Non-blank lines of a data file
pub fn data_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|l| !l.trim().is_empty()).collect()
}
