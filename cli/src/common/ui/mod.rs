//! # CyberBot Console Output (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Everything the chatbot shows the user goes through `Console`, a thin wrapper
//! around any `std::io::Write`. It adds:
//!
//! - **Tones**: each line is tagged with a `Tone` that maps to a foreground colour
//!   (via `crossterm`). With colour disabled the text is written unchanged, which
//!   is what tests and piped sessions use.
//! - **Prompts**: text without a trailing newline, flushed immediately.
//! - **Decorations**: the ASCII-art banner and a 60-column divider.
//! - **Typing effect**: a line printed one character at a time.
//!
//! ## Usage
//!
//! ```ignore
//! let mut console = Console::new(std::io::stdout(), true);
//! console.banner()?;
//! console.divider()?;
//! console.prompt("Please enter your name: ")?;
//! console.line(Tone::Reply, "Hello!")?;
//! ```
//!
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const DIVIDER_WIDTH: usize = 60;

const BANNER: &str = r"
       .--------.
      / .------. \
     / /        \ \
     | |        | |
    _| |________| |_
  .' |_|        |_| '.
  '._____ ____ _____.'
  |     .'____'.     |
  '.__.'.'    '.'.__.'
  '.__  | LOCK |  __.'
  |   '.'.____.'.'   |
  '.____'.____.'____.'
  '.________________.'
 Your Cybersecurity Awareness Assistant
";

/// What a line of output is, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Default terminal colour.
    Plain,
    /// Answers to the user's question.
    Reply,
    /// "Want more tips on ...?" invitations.
    FollowUp,
    MenuHeader,
    MenuItem,
    /// The numbered quick security tips.
    Tips,
    Divider,
    Banner,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Reply => Some(Color::Green),
            Tone::FollowUp => Some(Color::Cyan),
            Tone::MenuHeader => Some(Color::Magenta),
            Tone::MenuItem => Some(Color::White),
            Tone::Tips => Some(Color::Yellow),
            Tone::Divider => Some(Color::DarkGrey),
            Tone::Banner => Some(Color::Cyan),
        }
    }
}

/// A writer with colour and prompt helpers.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Writes `text` followed by a newline, coloured according to `tone`.
    pub fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.write_toned(tone, text)?;
        writeln!(self.out)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Writes `text` with no newline and flushes so it shows before input is read.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn divider(&mut self) -> io::Result<()> {
        self.line(Tone::Divider, &"-".repeat(DIVIDER_WIDTH))
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.line(Tone::Banner, BANNER)
    }

    /// Prints `text` one character at a time, pausing `delay` after each.
    pub fn type_out(&mut self, text: &str, delay: Duration) -> io::Result<()> {
        for c in text.chars() {
            write!(self.out, "{}", c)?;
            if !delay.is_zero() {
                self.out.flush()?;
                thread::sleep(delay);
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_toned(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        match tone.color().filter(|_| self.color) {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            ),
            None => write!(self.out, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(console: &Console<Vec<u8>>) -> String {
        String::from_utf8(console.get_ref().clone()).unwrap()
    }

    #[test]
    fn plain_output_without_color() {
        let mut console = Console::new(Vec::new(), false);
        console.line(Tone::Reply, "Hello").unwrap();
        console.prompt("Name: ").unwrap();
        assert_eq!(rendered(&console), "Hello\nName: ");
    }

    #[test]
    fn colored_output_wraps_text_in_escape_codes() {
        let mut console = Console::new(Vec::new(), true);
        console.line(Tone::Reply, "Hello").unwrap();
        let out = rendered(&console);
        assert!(out.contains("Hello"));
        assert!(out.starts_with('\u{1b}'));
        assert_ne!(out, "Hello\n");
    }

    #[test]
    fn plain_tone_is_never_colored() {
        let mut console = Console::new(Vec::new(), true);
        console.line(Tone::Plain, "Goodbye").unwrap();
        assert_eq!(rendered(&console), "Goodbye\n");
    }

    #[test]
    fn divider_is_sixty_dashes() {
        let mut console = Console::new(Vec::new(), false);
        console.divider().unwrap();
        assert_eq!(rendered(&console), format!("{}\n", "-".repeat(60)));
    }

    #[test]
    fn type_out_writes_whole_line() {
        let mut console = Console::new(Vec::new(), false);
        console.type_out("Hi there", Duration::ZERO).unwrap();
        assert_eq!(rendered(&console), "Hi there\n");
    }

    #[test]
    fn banner_mentions_assistant() {
        let mut console = Console::new(Vec::new(), false);
        console.banner().unwrap();
        assert!(rendered(&console).contains("Your Cybersecurity Awareness Assistant"));
    }
}
