//! # CyberBot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `config.rs`,
//! `main_tests.rs`). Each of those files is compiled as its own test crate and
//! pulls this module in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::PathBuf;

/// Tips the bot can give for each topic, mirroring the built-in tables.
pub const PHISHING_TIPS: [&str; 3] = [
    "Be cautious of emails asking for personal information.",
    "Check sender addresses for subtle spelling mistakes.",
    "Avoid clicking on suspicious links in emails.",
];
pub const PASSWORD_TIPS: [&str; 3] = [
    "Use strong, unique passwords with letters, numbers, and symbols.",
    "Avoid using names or birthdays in passwords.",
    "Consider using a password manager to store passwords securely.",
];

/// # Get CyberBot Command (`cyberbot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `cyberbot` binary. `CYBERBOT_CONFIG`
/// is cleared and `HOME`/`XDG_CONFIG_HOME` point at `empty_config_home()`, so the
/// developer's own `cyberbot/config.toml` is never read.
///
/// ## Panics
/// Panics if the `cyberbot` binary cannot be found via `Command::cargo_bin`.
pub fn cyberbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cyberbot").expect("Failed to find cyberbot binary for testing");
    let home = empty_config_home();
    cmd.env_remove("CYBERBOT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &home);
    cmd
}

/// A directory that is never created, so no user config file exists under it.
pub fn empty_config_home() -> PathBuf {
    std::env::temp_dir().join(format!("cyberbot-test-home-{}", std::process::id()))
}

/// # Quiet Chat Command (`chat_cmd`)
///
/// `cyberbot_cmd()` with the greeting clip, typing delay and colours turned off,
/// ready for `write_stdin`.
pub fn chat_cmd() -> Command {
    let mut cmd = cyberbot_cmd();
    cmd.args(["--no-audio", "--typing-delay", "0", "--no-color"]);
    cmd
}

/// Runs a scripted session and returns its stdout.
pub fn chat_output(script: &str) -> String {
    let output = chat_cmd()
        .write_stdin(script.to_string())
        .output()
        .expect("Failed to run cyberbot");
    assert!(output.status.success(), "cyberbot exited with {:?}", output.status);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

/// The text that follows `prefix` on the first line starting with it.
pub fn line_after<'a>(output: &'a str, prefix: &str) -> Option<&'a str> {
    output.lines().find_map(|line| line.strip_prefix(prefix))
}
