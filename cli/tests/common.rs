//! # Himmy CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `say.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and runs
//! the built `himmy` binary through `assert_cmd`.
//!
//! `himmy_cmd_in` runs the binary inside a sandbox directory so a developer's
//! own `.himmy.toml` or user config never leaks into a test.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// # Get Himmy Command (`himmy_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `himmy` binary.
///
/// ## Panics
/// Panics if the `himmy` binary cannot be found via `Command::cargo_bin`.
pub fn himmy_cmd() -> Command {
    Command::cargo_bin("himmy").expect("Failed to find himmy binary for testing")
}

/// Creates an empty sandbox directory. The `.git` marker stops the project
/// config search from walking above it.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    fs::create_dir(dir.path().join("home")).expect("Failed to create sandbox home");
    dir
}

/// `himmy_cmd` running in `dir`, with the user config directory inside it.
pub fn himmy_cmd_in(dir: &Path) -> Command {
    let home = dir.join("home");
    let mut cmd = himmy_cmd();
    cmd.current_dir(dir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("HIMMY_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
