//! # SupportBot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `supportbot` binary: standard flags, startup
//! output, and how configuration and model errors are reported.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    supportbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_options() {
    supportbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_startup_banner() {
    let ws = Workspace::new();
    ws.cmd()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Language model 'en-small' loaded successfully for preprocessing.\n",
        ))
        .stdout(predicate::str::contains("Welcome to the Student Support Chatbot!"))
        .stdout(predicate::str::contains(
            "Type 'exit' or 'quit' to end the conversation.",
        ));
}

/// A missing model is not an error: the instruction goes to stdout and the
/// process exits normally without starting a session.
#[test]
fn test_missing_model_prints_instruction() {
    let ws = Workspace::new();
    let missing = ws.dir.path().join("no-such-model.toml");
    ws.cmd()
        .arg("--model")
        .arg(&missing)
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Language model '{}' not found.",
            missing.display()
        )))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_missing_model_from_env() {
    let ws = Workspace::new();
    ws.cmd()
        .env("SUPPORTBOT_MODEL", "en-huge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Language model 'en-huge' not found."));
}

#[test]
fn test_invalid_model_file_fails() {
    let ws = Workspace::new();
    let path = ws.write_file("bad.toml", "name = \"bad\"\n[[rules]]\nsuffix = \"s\"\nreplacement = \"\"\nmin_stem = 0\n");
    ws.cmd()
        .arg("-m")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("min_stem 0"));
}

#[test]
fn test_empty_exit_commands_rejected() {
    let ws = Workspace::new();
    ws.write_project_config("[session]\nexit_commands = []\n");
    ws.cmd()
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_config_field_rejected() {
    let ws = Workspace::new();
    ws.write_project_config("[session]\ncolor = \"red\"\n");
    ws.cmd()
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_verbose_logs_processed_tokens() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("-vv")
        .write_stdin("Thanks a lot!\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(r#"["thank", "lot"]"#));
}
