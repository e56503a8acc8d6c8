//! # Himmy CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `himmy` binary: `--help`, `--version`, the
//! default subcommand, and error reporting.
//!
mod common;
use common::*;
use predicates::prelude::*;

/// Test that `--help` succeeds and lists the subcommands.
#[test]
fn test_main_help_flag() {
    himmy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("say"))
        .stdout(predicate::str::contains("classify"));
}

/// Test that `--version` prints the package version.
#[test]
fn test_main_version_flag() {
    himmy_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that running without a subcommand starts a chat session.
#[test]
fn test_default_subcommand_is_chat() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "HimmyBot terminal chat (type 'exit' to quit). Commands: !photo, !rec, !roll, !quiz.",
        ))
        .stdout(predicate::str::ends_with("Later! Stay vibey.\n"));
}

/// Test that an unknown subcommand is rejected by the argument parser.
#[test]
fn test_unknown_subcommand_fails() {
    himmy_cmd().arg("dance").assert().failure();
}

/// Test that a missing explicit config file is reported and exits with status 1.
#[test]
fn test_missing_config_file_is_an_error() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .args(["--config", "does-not-exist.toml", "say", "hi"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
