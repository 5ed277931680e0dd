//! Test support utilities for code-sign integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use code_sign::core::config::AppConfig;
use code_sign::core::domain::{SecretsBundle, SecretsPaths};
use code_sign::core::store;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Absolute path of `name` inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file with `contents`.
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Create a fake executable.
    pub fn executable(&self, name: &str) -> PathBuf {
        self.write(name, FAKE_EXECUTABLE)
    }

    /// Save a secrets pair named by `name` (which must end in `.crt`).
    pub fn bundle(&self, name: &str, certificate: &[u8], password: &str) -> SecretsPaths {
        let config = AppConfig::no_op(self.dir.path().to_path_buf());
        let paths = SecretsPaths::parse(&config, &self.path(name)).expect("bad certificate path");
        let bundle = SecretsBundle::new(certificate.to_vec(), password.to_string());
        store::save(&bundle, &paths, false).expect("failed to save bundle");
        paths
    }

    /// Names of all entries in the test directory, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("failed to read test dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
