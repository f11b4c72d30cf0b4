//! # Chat Session
//!
//! File: cli/src/bot/session.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! The interactive request/response loop:
//!
//! 1. Banner and divider
//! 2. Ask for the user's name until a non-blank one is given
//! 3. Typed greeting, divider, options menu
//! 4. Read a line, answer it, repeat
//!
//! Blank chat lines are skipped without comment. A line that is exactly `exit`
//! (any case) prints a farewell and ends the session. End of input ends it the
//! same way so piped sessions terminate cleanly.
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers.
//!
use crate::bot::dispatcher::{show_options, Dispatcher};
use crate::bot::knowledge::KnowledgeBase;
use crate::common::ui::{Console, Tone};
use crate::core::error::{BotError, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

const NAME_PROMPT: &str = "Please enter your name: ";
const NAME_RETRY_PROMPT: &str = "Name cannot be empty. Try again: ";
const CHAT_PROMPT: &str = "Ask me something (or type 'exit' to quit): ";
const EXIT_COMMAND: &str = "exit";
const FAREWELL: &str = "Goodbye! Stay safe online!";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`.
    Exit,
    /// Input ran out before the user typed `exit`.
    EndOfInput,
}

/// Runs a full chat session reading from `input` and writing to `console`.
pub fn run_session<I, W, R>(
    input: &mut I,
    console: &mut Console<W>,
    kb: KnowledgeBase,
    rng: R,
    typing_delay: Duration,
) -> Result<SessionEnd>
where
    I: BufRead,
    W: Write,
    R: Rng,
{
    console.banner()?;
    console.divider()?;

    let Some(user_name) = read_name(input, console)? else {
        info!("Input closed before a name was entered.");
        console.blank_line()?;
        return Ok(SessionEnd::EndOfInput);
    };
    info!("Starting chat session for {}", user_name);

    console.blank_line()?;
    console.type_out(
        &format!("👋 Hello {}! I'm your Cybersecurity Awareness Bot.", user_name),
        typing_delay,
    )?;
    console.divider()?;
    show_options(console)?;

    let mut dispatcher = Dispatcher::new(kb, user_name, rng);
    let end = loop {
        console.blank_line()?;
        console.prompt(CHAT_PROMPT)?;
        let Some(line) = read_line(input)? else {
            break SessionEnd::EndOfInput;
        };
        if line.trim().is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case(EXIT_COMMAND) {
            break SessionEnd::Exit;
        }
        dispatcher.handle(&line, console)?;
    };

    console.blank_line()?;
    console.line(Tone::Plain, FAREWELL)?;
    info!("Chat session ended: {:?}", end);
    Ok(end)
}

/// Prompts until a non-blank name is read. `None` if input ends first.
fn read_name<I: BufRead, W: Write>(input: &mut I, console: &mut Console<W>) -> Result<Option<String>> {
    console.prompt(NAME_PROMPT)?;
    loop {
        match read_line(input)? {
            None => return Ok(None),
            Some(name) if !name.trim().is_empty() => return Ok(Some(name.trim().to_string())),
            Some(_) => {
                debug!("Rejected blank name");
                console.prompt(NAME_RETRY_PROMPT)?;
            }
        }
    }
}

/// One line without its line terminator. `None` at end of input. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD.
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf).map_err(BotError::from)?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf)
        .trim_end_matches(['\n', '\r'])
        .to_string();
    Ok(Some(line))
}
