//! # Greeting Audio (`common::audio`)
//!
//! File: cli/src/common/audio.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! Best-effort playback of the greeting clip at startup. Nothing here is ever
//! fatal: a missing file, a build without the `audio` feature, or a playback
//! failure is logged as a warning and the session carries on.
//!
//! Real playback uses `rodio` and blocks until the clip finishes, so the banner
//! appears after the greeting has been heard.
//!
use crate::core::config::GreetingConfig;
use crate::core::error::BotError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Plays the configured greeting clip if audio is enabled. Failures are logged.
pub fn play_greeting(config: &GreetingConfig) {
    if !config.audio_enabled {
        debug!("Greeting audio disabled; skipping playback.");
        return;
    }
    let path = Path::new(&config.audio_file);
    match play_clip(path) {
        Ok(()) => info!("Played greeting clip {}", path.display()),
        Err(e) => warn!(
            "{}. Make sure '{}' is in the correct directory.",
            e,
            path.display()
        ),
    }
}

fn play_clip(path: &Path) -> Result<(), BotError> {
    if !path.is_file() {
        return Err(BotError::Audio(format!(
            "file '{}' not found",
            path.display()
        )));
    }
    play_file(path)
}

#[cfg(feature = "audio")]
fn play_file(path: &Path) -> Result<(), BotError> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path).map_err(|e| BotError::Audio(e.to_string()))?;
    let (_stream, stream_handle) =
        rodio::OutputStream::try_default().map_err(|e| BotError::Audio(e.to_string()))?;
    let sink = rodio::Sink::try_new(&stream_handle).map_err(|e| BotError::Audio(e.to_string()))?;
    let source =
        rodio::Decoder::new(BufReader::new(file)).map_err(|e| BotError::Audio(e.to_string()))?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "audio"))]
fn play_file(_path: &Path) -> Result<(), BotError> {
    Err(BotError::Audio(
        "this build has no audio support (enable the `audio` feature)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_clip_is_an_audio_error() {
        let temp_dir = tempdir().unwrap();
        let err = play_clip(&temp_dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, BotError::Audio(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn directory_is_not_a_clip() {
        let temp_dir = tempdir().unwrap();
        assert!(play_clip(temp_dir.path()).is_err());
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn existing_clip_without_audio_feature_reports_missing_support() {
        let temp_dir = tempdir().unwrap();
        let clip = temp_dir.path().join("greeting.wav");
        std::fs::write(&clip, b"RIFF").unwrap();
        let err = play_clip(&clip).unwrap_err();
        assert!(err.to_string().contains("no audio support"));
    }

    #[test]
    fn play_greeting_never_panics() {
        let temp_dir = tempdir().unwrap();
        let config = GreetingConfig {
            audio_enabled: true,
            audio_file: temp_dir.path().join("missing.wav").display().to_string(),
            typing_delay_ms: 0,
        };
        play_greeting(&config);

        let disabled = GreetingConfig {
            audio_enabled: false,
            ..config
        };
        play_greeting(&disabled);
    }
}
