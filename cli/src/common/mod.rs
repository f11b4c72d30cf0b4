//! # CyberBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Terminal-facing helpers used by the chat session and the entry point, kept
//! apart from the chat logic in `bot::` and the infrastructure in `core::`.
//!
//! - **`audio`**: Best-effort playback of the greeting clip.
//! - **`ui`**: The `Console` writer: coloured lines, prompts, banner, divider,
//!   and the typing effect.
//!

/// Greeting clip playback (real playback behind the `audio` feature).
pub mod audio;
/// Console output helpers (colours, prompts, banner, typing effect).
pub mod ui;
