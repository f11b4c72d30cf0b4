//! # CyberBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! This module loads, merges and validates the presentation settings for a chat
//! session: whether to play the greeting clip, where that clip lives, how fast the
//! greeting is "typed", and whether output is coloured. The knowledge tables are
//! not configurable; they are built into `bot::knowledge`.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--audio`, `--no-audio`, `--typing-delay`, `--no-color`)
//! 2. The file named by `--config` / `CYBERBOT_CONFIG`, or else the user file
//!    `<config dir>/cyberbot/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [greeting]
//! audio_enabled = true
//! audio_file = "~/sounds/CyberBot Audio.wav"
//! typing_delay_ms = 40
//!
//! [display]
//! color = true
//! ```
//!
//! ```ignore
//! let cfg = config::load_config(&overrides)?;
//! let delay = Duration::from_millis(cfg.greeting.typing_delay_ms);
//! ```
//!
use crate::core::error::{BotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound for the per-character greeting delay.
pub const MAX_TYPING_DELAY_MS: u64 = 1000;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings for the startup greeting (audio clip and typing effect).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GreetingConfig {
    /// Attempt to play the greeting clip at startup.
    #[serde(default = "default_audio_enabled")]
    pub audio_enabled: bool,
    /// Path to the greeting clip (can use ~). Will be expanded.
    #[serde(default = "default_audio_file")]
    pub audio_file: String,
    /// Delay between characters of the typed greeting, in milliseconds.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

/// Console display settings.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Colour replies, menus and prompts.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            audio_enabled: default_audio_enabled(),
            audio_file: default_audio_file(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_audio_enabled() -> bool {
    true
}
fn default_audio_file() -> String {
    "CyberBot Audio.wav".to_string()
}
fn default_typing_delay_ms() -> u64 {
    40
}
fn default_color() -> bool {
    true
}

/// Values supplied on the command line. `None`/`false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub audio_file: Option<String>,
    pub no_audio: bool,
    pub typing_delay_ms: Option<u64>,
    pub no_color: bool,
}

/// Loads the effective configuration: file settings, then CLI overrides, then
/// path expansion and validation.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let file_config = match &overrides.config_path {
        Some(path) => Some(load_explicit_config(path)?),
        None => load_user_config()?,
    };
    let mut config = apply_overrides(file_config.unwrap_or_default(), overrides);
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_explicit_config(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(anyhow!(BotError::ConfigNotFound {
            path: path.display().to_string(),
        }));
    }
    info!("Loading configuration from: {}", path.display());
    load_config_from_path(path)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CyberBot", "cyberbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn apply_overrides(mut config: Config, overrides: &ConfigOverrides) -> Config {
    if let Some(audio_file) = &overrides.audio_file {
        config.greeting.audio_file = audio_file.clone();
        config.greeting.audio_enabled = true;
    }
    // --no-audio wins over --audio
    if overrides.no_audio {
        config.greeting.audio_enabled = false;
    }
    if let Some(delay) = overrides.typing_delay_ms {
        config.greeting.typing_delay_ms = delay;
    }
    if overrides.no_color {
        config.display.color = false;
    }
    config
}

fn expand_config_paths(config: &mut Config) {
    config.greeting.audio_file = shellexpand::tilde(&config.greeting.audio_file).into_owned();
    debug!("Expanded audio file path: {}", config.greeting.audio_file);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.greeting.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(BotError::Config(format!(
            "typing_delay_ms is {} but must be at most {}.",
            config.greeting.typing_delay_ms, MAX_TYPING_DELAY_MS
        ))));
    }
    if config.greeting.audio_enabled && config.greeting.audio_file.trim().is_empty() {
        return Err(anyhow!(BotError::Config(
            "audio_file cannot be empty while audio is enabled.".to_string()
        )));
    }
    if config.greeting.audio_enabled && !Path::new(&config.greeting.audio_file).exists() {
        // Not fatal: playback is best-effort and reports this again at startup.
        debug!(
            "Configured greeting clip '{}' does not exist.",
            config.greeting.audio_file
        );
    }
    Ok(())
}
