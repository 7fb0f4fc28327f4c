//! # SupportBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! runs inside a fresh temporary directory that looks like a git checkout,
//! with its own config home, so configuration files on the machine running
//! the tests are never picked up.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The fixed strings the chatbot prints.
pub const GREETING: &str =
    "Hello there! How can I assist you with your university-related questions today?";
pub const THANKS: &str = "You're most welcome! I'm glad I could help.";
pub const DEFAULT_REPLY: &str = "I'm designed to answer questions related to student support services. Could you please rephrase your question, or ask about a specific university topic?";
pub const EXIT_FAREWELL: &str = "Goodbye! Have a great day.";

/// # Isolated Workspace (`Workspace`)
///
/// A temporary working directory plus config home. Dropping it removes both.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("project/.git")).expect("Failed to create .git");
        fs::create_dir_all(dir.path().join("config-home")).expect("Failed to create config home");
        Self { dir }
    }

    pub fn project_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("project")
    }

    /// Writes `.supportbot.toml` into the project directory.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_dir().join(".supportbot.toml"), content)
            .expect("Failed to write project config");
    }

    /// Writes a file relative to the workspace root and returns its path.
    pub fn write_file(&self, relative: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(relative);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// `supportbot` command running inside this workspace.
    pub fn cmd(&self) -> Command {
        isolated_cmd(&self.project_dir(), &self.dir.path().join("config-home"))
    }
}

fn isolated_cmd(cwd: &Path, config_home: &Path) -> Command {
    let mut cmd = supportbot_cmd();
    cmd.current_dir(cwd)
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("SUPPORTBOT_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

/// # Get SupportBot Command (`supportbot_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `supportbot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn supportbot_cmd() -> Command {
    Command::cargo_bin("supportbot").expect("Failed to find supportbot binary for testing")
}
