//! # CyberBot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Verifies the top-level behaviour of the `cyberbot` binary: standard flags
//! like `--version` and `--help`, and startup up to the name prompt.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_main_help_flag() {
    cyberbot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-audio"));
}

#[test]
fn test_main_version_flag() {
    cyberbot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_fails() {
    cyberbot_cmd().arg("--bogus").assert().failure();
}

#[test]
fn test_startup_shows_banner_and_name_prompt() {
    chat_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Your Cybersecurity Awareness Assistant")
                .and(predicate::str::contains("Please enter your name: ")),
        );
}

#[test]
fn test_missing_audio_clip_is_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let clip = temp_dir.path().join("missing.wav");
    cyberbot_cmd()
        .args(["--typing-delay", "0", "--no-color", "--audio"])
        .arg(&clip)
        .write_stdin("Sam\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye! Stay safe online!"))
        .stderr(predicate::str::contains("Could not play greeting audio"));
}
