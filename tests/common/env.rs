//! Test environment for isolated exercise-pack runs.
//!
//! Each `TestEnv` owns a temporary working directory and a temporary home so
//! that no real user configuration leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the CLI
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

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to the working directory
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run the CLI from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(bin())
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .output()
            .expect("Failed to execute exercise-pack");

        output_to_result(output)
    }

    /// Write a file below the working directory, creating parents
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Entry names and bodies of an archive below the working directory
    pub fn read_archive(&self, relative_path: &str) -> Vec<(String, String)> {
        exercise_pack::archive::read_bodies(&self.project_path(relative_path))
            .expect("Failed to read archive")
            .into_iter()
            .map(|(name, body)| (name, String::from_utf8(body).expect("entry is not UTF-8")))
            .collect()
    }

    /// Entry names of an archive below the working directory
    pub fn archive_names(&self, relative_path: &str) -> Vec<String> {
        self.read_archive(relative_path)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_exercise-pack")
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Paths of the bundled template set, in archive order
pub fn bundled_paths() -> Vec<String> {
    exercise_pack::template::bundled::technical_interview_exercise()
        .expect("bundled templates are valid")
        .paths()
        .into_iter()
        .map(str::to_string)
        .collect()
}
