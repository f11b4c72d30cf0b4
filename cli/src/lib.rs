//! # CyberBot Library Root
//!
//! File: cli/src/lib.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! Exposes the chatbot modules to the `cyberbot` binary (`main.rs`) and to the
//! integration tests under `cli/tests/`.
//!
//! - `bot`: Chat logic (tables, classifier, dispatcher, session loop)
//! - `common`: Terminal helpers (console output, greeting audio)
//! - `core`: Core infrastructure (errors, config)
//!

pub mod bot;
pub mod common;
pub mod core;
