//! # Himmy CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `himmy chat` through piped stdin: multi-turn quiz flow, blank-line
//! handling, exit words, end of input, and configuration from files.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

/// Test that a quiz started on one line is judged on the next.
#[test]
fn test_chat_quiz_round_trip() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .args(["chat", "--seed", "3"])
        .write_stdin("!quiz\n1945\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz time: In which year did WWII end?"))
        .stdout(predicate::str::contains(
            "Nice! That's right — 1945 was the year WWII ended.",
        ))
        .stdout(predicate::str::ends_with("Later! Stay vibey.\n"));
}

/// Test that a wrong answer gets the correction and the quiz does not repeat.
#[test]
fn test_chat_quiz_wrong_answer() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .arg("chat")
        .write_stdin("himmy, quiz\nnineteen forty four\n1945\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not quite — the correct year was 1945."))
        .stdout(predicate::str::contains("Nice! That's right").not());
}

/// Test that exit words are case-insensitive and blank lines get no reply.
#[test]
fn test_chat_blank_lines_and_exit_word() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .args(["chat", "--no-banner"])
        .write_stdin("\n   \nQUIT\nhi\n")
        .assert()
        .success()
        .stdout("> > > Later! Stay vibey.\n");
}

/// Test that end of input ends the session with the farewell.
#[test]
fn test_chat_end_of_input() {
    let dir = sandbox();
    himmy_cmd_in(dir.path())
        .args(["chat", "--no-banner"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("> \nLater! Stay vibey.\n");
}

/// Test that the same seed gives the same conversation.
#[test]
fn test_chat_seed_is_reproducible() {
    let dir = sandbox();
    let script = "hello\nwhat is the capital of peru?\n!roll 4d20\nthe weather is nice\nexit\n";
    let run = || {
        himmy_cmd_in(dir.path())
            .args(["--seed", "42"])
            .write_stdin(script)
            .output()
            .expect("Failed to run himmy")
            .stdout
    };
    assert_eq!(run(), run());
}

/// Test that a project `.himmy.toml` customizes the session.
#[test]
fn test_chat_project_config() {
    let dir = sandbox();
    fs::write(
        dir.path().join(".himmy.toml"),
        r#"
[session]
prompt = "you> "
banner = "{{ name | upper }} online"
farewell = "Peace from {{ name }}."
exit_words = ["bye"]
"#,
    )
    .expect("Failed to write project config");

    himmy_cmd_in(dir.path())
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout("HIMMY online\nyou> Peace from Himmy.\n");
}

/// Test that `--config` (and `HIMMY_CONFIG`) selects an explicit file.
#[test]
fn test_chat_explicit_config() {
    let dir = sandbox();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[session]\nfarewell = \"Catch you at golden hour.\"\n")
        .expect("Failed to write config");

    himmy_cmd_in(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "chat"])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Catch you at golden hour.\n"));

    himmy_cmd_in(dir.path())
        .env("HIMMY_CONFIG", &config_path)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Catch you at golden hour.\n"));
}

/// Test that invalid configuration stops startup with status 1.
#[test]
fn test_chat_invalid_config() {
    let dir = sandbox();
    fs::write(dir.path().join(".himmy.toml"), "[session]\nexit_words = [\"  \"]\n")
        .expect("Failed to write project config");

    himmy_cmd_in(dir.path())
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

/// Test that a broken banner template is a startup error.
#[test]
fn test_chat_bad_banner_template() {
    let dir = sandbox();
    fs::write(dir.path().join(".himmy.toml"), "[session]\nbanner = \"{{ name \"\n")
        .expect("Failed to write project config");

    himmy_cmd_in(dir.path())
        .write_stdin("exit\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("banner"));
}
