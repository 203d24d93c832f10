//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed into a temporary directory and
//! `KUBECONFIG` removed, so results never depend on the machine running
//! the tests.

use assert_cmd::Command;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory inside the temporary directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty home directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("kindconf").expect("Failed to find kindconf binary");
        cmd.env_remove("KUBECONFIG")
            .env_remove("KINDCONF_LOG_MODE")
            .env("HOME", &self.home)
            .env("USERPROFILE", &self.home);
        cmd
    }

    /// Get a command builder with `KUBECONFIG` set to the given paths.
    pub fn command_with_chain(&self, paths: &[PathBuf]) -> Command {
        let mut cmd = self.command();
        cmd.env("KUBECONFIG", chain(paths));
        cmd
    }

    /// The default kubeconfig path under the fake home.
    pub fn default_kubeconfig(&self) -> PathBuf {
        self.home.join(".kube").join("config")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of a file under the temporary directory, without creating it.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.temp_path.join(name)
    }

    /// Create a file with the given contents under the temporary directory.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.file_path(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.file_path(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Join paths with the platform's path-list separator.
#[allow(dead_code)]
pub fn chain(paths: &[PathBuf]) -> OsString {
    std::env::join_paths(paths).expect("Path contains a separator")
}

/// Split command stdout into trimmed, non-empty lines.
#[allow(dead_code)]
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
