//! # CyberBot Knowledge Tables
//!
//! File: cli/src/bot/knowledge.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Static lookup tables the chatbot answers from:
//! - `KeywordTable`: topic keyword → tips, one chosen at random per reply
//! - `SentimentTable`: feeling word → one empathetic reply
//! - `CommandTable`: trigger phrase → parameterless `CommandAction`
//!
//! Tables are ordered `Vec`s rather than maps. Lookups are first-match-wins
//! substring scans, so declaration order is the tie-break order when an input
//! could match two entries.
//!
use crate::core::error::{BotError, Result};
use anyhow::anyhow;

/// A topic keyword and the tips offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub tips: Vec<&'static str>,
}

/// A sentiment word and its fixed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentEntry {
    pub word: &'static str,
    pub response: &'static str,
}

/// The zero-argument actions a command phrase can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Print three numbered general security tips.
    ShowSecurityTips,
    /// Print a status greeting that uses the user's name.
    StatusGreeting,
    /// Re-print the options menu.
    ShowOptions,
}

/// A command trigger phrase bound to its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub phrase: &'static str,
    pub action: CommandAction,
}

#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    pub fn new(entries: Vec<KeywordEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Tips for `keyword`, if it is in the table.
    pub fn tips(&self, keyword: &str) -> Option<&[&'static str]> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.tips.as_slice())
    }

    /// First keyword contained in `text`.
    pub fn first_in(&self, text: &str) -> Option<&KeywordEntry> {
        self.entries.iter().find(|e| text.contains(e.keyword))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentTable {
    entries: Vec<SentimentEntry>,
}

impl SentimentTable {
    pub fn new(entries: Vec<SentimentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SentimentEntry] {
        &self.entries
    }

    pub fn response(&self, word: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.response)
    }

    /// First sentiment word contained in `text`.
    pub fn first_in(&self, text: &str) -> Option<&SentimentEntry> {
        self.entries.iter().find(|e| text.contains(e.word))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn action(&self, phrase: &str) -> Option<CommandAction> {
        self.entries
            .iter()
            .find(|e| e.phrase == phrase)
            .map(|e| e.action)
    }

    /// First command phrase contained in `text`.
    pub fn first_in(&self, text: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| text.contains(e.phrase))
    }
}

/// The three tables, built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub keywords: KeywordTable,
    pub sentiments: SentimentTable,
    pub commands: CommandTable,
}

impl KnowledgeBase {
    /// The built-in cybersecurity awareness tables.
    pub fn builtin() -> Self {
        let keywords = KeywordTable::new(vec![
            KeywordEntry {
                keyword: "phishing",
                tips: vec![
                    "Be cautious of emails asking for personal information.",
                    "Check sender addresses for subtle spelling mistakes.",
                    "Avoid clicking on suspicious links in emails.",
                ],
            },
            KeywordEntry {
                keyword: "password",
                tips: vec![
                    "Use strong, unique passwords with letters, numbers, and symbols.",
                    "Avoid using names or birthdays in passwords.",
                    "Consider using a password manager to store passwords securely.",
                ],
            },
            KeywordEntry {
                keyword: "privacy",
                tips: vec![
                    "Review your privacy settings regularly.",
                    "Limit personal info you share online.",
                    "Use secure messaging apps for private conversations.",
                ],
            },
            KeywordEntry {
                keyword: "scam",
                tips: vec![
                    "Scammers often pose as trusted entities; always verify before acting.",
                    "Watch for urgent demands for money or personal details.",
                    "Report suspicious activity to authorities immediately.",
                ],
            },
        ]);

        let sentiments = SentimentTable::new(vec![
            SentimentEntry {
                word: "worried",
                response: "It's completely understandable to feel that way. Let me share some tips to ease your mind.",
            },
            SentimentEntry {
                word: "curious",
                response: "Curiosity is great! Here's some info to dive deeper.",
            },
            SentimentEntry {
                word: "frustrated",
                response: "No problem — cybersecurity can be tricky. I'm here to help with clear advice.",
            },
        ]);

        let commands = CommandTable::new(vec![
            CommandEntry {
                phrase: "security tips",
                action: CommandAction::ShowSecurityTips,
            },
            CommandEntry {
                phrase: "how are you",
                action: CommandAction::StatusGreeting,
            },
            CommandEntry {
                phrase: "what can i ask",
                action: CommandAction::ShowOptions,
            },
        ]);

        Self {
            keywords,
            sentiments,
            commands,
        }
    }

    /// Checks the table invariants: keywords are non-empty lowercase tokens with
    /// at least one tip, no lookup key is blank, sentiment replies are non-empty,
    /// and no sentiment word contains another one.
    pub fn validate(&self) -> Result<()> {
        for entry in self.keywords.entries() {
            if entry.keyword.is_empty()
                || entry.keyword != entry.keyword.to_lowercase()
                || entry.keyword.contains(char::is_whitespace)
            {
                return Err(anyhow!(BotError::InvalidKnowledge(format!(
                    "keyword '{}' must be a non-empty lowercase token",
                    entry.keyword
                ))));
            }
            if entry.tips.is_empty() {
                return Err(anyhow!(BotError::InvalidKnowledge(format!(
                    "keyword '{}' has no tips",
                    entry.keyword
                ))));
            }
        }
        let sentiments = self.sentiments.entries();
        for (i, entry) in sentiments.iter().enumerate() {
            if entry.word.trim().is_empty() {
                return Err(anyhow!(BotError::InvalidKnowledge(
                    "sentiment word cannot be blank".to_string()
                )));
            }
            if entry.response.trim().is_empty() {
                return Err(anyhow!(BotError::InvalidKnowledge(format!(
                    "sentiment '{}' has an empty response",
                    entry.word
                ))));
            }
            // Overlapping words would let table order pick the reply.
            for other in sentiments.iter().skip(i + 1) {
                if entry.word.contains(other.word) || other.word.contains(entry.word) {
                    return Err(anyhow!(BotError::InvalidKnowledge(format!(
                        "sentiment words '{}' and '{}' overlap",
                        entry.word, other.word
                    ))));
                }
            }
        }
        for entry in self.commands.entries() {
            if entry.phrase.trim().is_empty() {
                return Err(anyhow!(BotError::InvalidKnowledge(
                    "command phrase cannot be blank".to_string()
                )));
            }
        }
        Ok(())
    }
}
