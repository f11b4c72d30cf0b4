//! # CyberBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CyberBot console chatbot.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and playing the greeting clip
//! - Running the interactive chat session on stdin/stdout
//!
//! ## Examples
//!
//! ```bash
//! # Chat with default settings
//! cyberbot
//!
//! # No greeting clip, instant greeting, debug logs on stderr
//! cyberbot --no-audio --typing-delay 0 -vv
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (file + flags)
//! 4. Play the greeting clip (best-effort)
//! 5. Run the chat session until `exit`
//!
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use cyberbot::bot::knowledge::KnowledgeBase;
use cyberbot::bot::session;
use cyberbot::common::{audio, ui::Console};
use cyberbot::core::config::{self, ConfigOverrides};
use cyberbot::core::error::Result;

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cyberbot",
    about = "🔒 CyberBot: Console Cybersecurity Awareness Chatbot",
    long_about = "Chat about phishing, passwords, privacy and scams.\n\
                  Tell CyberBot what you're interested in and it will remember for the session.",
    version
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "CYBERBOT_CONFIG")]
    config: Option<PathBuf>,
    /// Greeting clip to play at startup.
    #[arg(long, value_name = "FILE")]
    audio: Option<String>,
    /// Skip the greeting clip.
    #[arg(long)]
    no_audio: bool,
    /// Milliseconds between characters of the typed greeting.
    #[arg(long, value_name = "MS")]
    typing_delay: Option<u64>,
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            audio_file: self.audio.clone(),
            no_audio: self.no_audio,
            typing_delay_ms: self.typing_delay,
            no_color: self.no_color,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("CyberBot failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = config::load_config(&cli.overrides())?;
    let kb = KnowledgeBase::builtin();
    kb.validate()?;

    audio::play_greeting(&cfg.greeting);

    let stdout = io::stdout();
    let color = cfg.display.color && stdout.is_terminal();
    let mut console = Console::new(stdout.lock(), color);
    let mut input = io::stdin().lock();

    let end = session::run_session(
        &mut input,
        &mut console,
        kb,
        rand::rng(),
        Duration::from_millis(cfg.greeting.typing_delay_ms),
    )?;
    tracing::debug!("Session finished with {:?}", end);
    Ok(())
}
