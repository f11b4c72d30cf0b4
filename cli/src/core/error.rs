//! # CyberBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! This module defines the error types used throughout CyberBot. Chat behaviour
//! itself has no failure paths (unrecognized input is a normal reply), so the
//! errors here cover startup and I/O concerns only.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `BotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors (bad TOML values, missing explicit config file)
//! - Greeting audio errors (always recovered locally and logged as warnings)
//! - Knowledge table invariant violations
//! - Console I/O failures
//!
//! ## Examples
//!
//! ```ignore
//! if cfg.greeting.typing_delay_ms > MAX_TYPING_DELAY_MS {
//!     return Err(anyhow!(BotError::Config("typing delay too long".into())));
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CyberBot application.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file '{path}' not found.")]
    ConfigNotFound { path: String },

    #[error("Could not play greeting audio: {0}")]
    Audio(String),

    #[error("Invalid knowledge table: {0}")]
    InvalidKnowledge(String),

    #[error("Console I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = BotError::Config("typing_delay_ms must be at most 1000".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: typing_delay_ms must be at most 1000"
        );

        let not_found = BotError::ConfigNotFound {
            path: "/tmp/missing.toml".into(),
        };
        assert_eq!(
            not_found.to_string(),
            "Configuration file '/tmp/missing.toml' not found."
        );

        let audio = BotError::Audio("file 'CyberBot Audio.wav' not found".into());
        assert_eq!(
            audio.to_string(),
            "Could not play greeting audio: file 'CyberBot Audio.wav' not found"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BotError = io.into();
        assert!(err.to_string().starts_with("Console I/O failed:"));
    }
}
