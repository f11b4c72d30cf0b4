//! # CyberBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the chat session and the
//! entry point:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{BotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
