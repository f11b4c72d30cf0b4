//! # CyberBot Chat Logic (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! The chatbot itself, leaf modules first:
//!
//! - `knowledge`: Keyword, sentiment and command tables
//! - `memory`: The single remembered interest for a session
//! - `classifier`: Priority-ordered matching of input to a `RuleMatch`
//! - `dispatcher`: Printing the reply for a `RuleMatch`
//! - `session`: The read/answer loop tying it together
//!
//! Control flow per line: raw input → `classifier::normalize` →
//! `classifier::classify` → `Dispatcher::dispatch` → console.
//!

pub mod classifier;
pub mod dispatcher;
pub mod knowledge;
pub mod memory;
pub mod session;
