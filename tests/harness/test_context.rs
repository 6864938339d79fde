//! Shared testing harness for `spm-mirror` integration tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const ANCHOR: &str = "JDStatusBarNotification/Public/NotificationPresenter.swift";

/// Testing harness providing an isolated project root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create an empty project root.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create a project root with the source layout and an empty mirror directory.
    pub(crate) fn with_project() -> Self {
        let ctx = Self::new();
        ctx.write(ANCHOR, "public class NotificationPresenter {}\n");
        ctx.mkdir("spm_sources");
        ctx
    }

    /// Absolute path to the project root.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the default mirror directory.
    pub(crate) fn mirror_path(&self) -> PathBuf {
        self.root().join("spm_sources")
    }

    /// Write a file relative to the project root, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let child = self.root.child(relative);
        if let Some(parent) = child.path().parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        child.write_str(content).expect("Failed to write test file");
    }

    /// Create a directory relative to the project root.
    pub(crate) fn mkdir(&self, relative: &str) {
        self.root.child(relative).create_dir_all().expect("Failed to create test directory");
    }

    /// Read a file relative to the project root.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("Failed to read test file")
    }

    /// Build a command with `PROJECT_DIR` pointing at the project root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_env();
        cmd.env("PROJECT_DIR", self.root());
        cmd
    }

    /// Build a command with `PROJECT_DIR` removed from the environment.
    pub(crate) fn cli_without_env(&self) -> Command {
        let mut cmd = Command::cargo_bin("spm-mirror").expect("Failed to locate spm-mirror binary");
        cmd.current_dir(self.root()).env_remove("PROJECT_DIR");
        cmd
    }
}
