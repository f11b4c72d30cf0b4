//! # Input Classifier
//!
//! File: cli/src/bot/classifier.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Decides which kind of reply a line of user input gets. Rules are checked in
//! a fixed priority order and the first hit wins:
//!
//! 1. contains "i'm interested in" → `DeclareInterest`
//! 2. contains "remind me"         → `RecallInterest`
//! 3. contains a sentiment word    → `Sentiment`
//! 4. contains a topic keyword     → `Keyword`
//! 5. contains a command phrase    → `Command`
//! 6. anything else                → `Unrecognized`
//!
//! Matching is plain substring containment on normalized (lowercased, trimmed)
//! text. A sentiment hit does not rule out a keyword; the dispatcher scans for
//! one again to build a combined reply.
//!
use crate::bot::knowledge::KnowledgeBase;
use tracing::debug;

const DECLARE_PHRASE: &str = "i'm interested in";
const RECALL_PHRASE: &str = "remind me";

/// The rule that matched a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    /// The user stated an interest; carries the text after the declare phrase.
    DeclareInterest(String),
    /// The user asked to be reminded of their interest.
    RecallInterest,
    Sentiment(&'static str),
    Keyword(&'static str),
    Command(&'static str),
    Unrecognized,
}

/// Lowercases and trims raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classifies already-normalized input against the knowledge tables.
pub fn classify(kb: &KnowledgeBase, input: &str) -> RuleMatch {
    let matched = if let Some(interest) = extract_interest(input) {
        RuleMatch::DeclareInterest(interest)
    } else if input.contains(RECALL_PHRASE) {
        RuleMatch::RecallInterest
    } else if let Some(entry) = kb.sentiments.first_in(input) {
        RuleMatch::Sentiment(entry.word)
    } else if let Some(entry) = kb.keywords.first_in(input) {
        RuleMatch::Keyword(entry.keyword)
    } else if let Some(entry) = kb.commands.first_in(input) {
        RuleMatch::Command(entry.phrase)
    } else {
        RuleMatch::Unrecognized
    };
    debug!("Classified {:?} as {:?}", input, matched);
    matched
}

/// Text following the declare phrase, trimmed. `None` when the phrase is absent;
/// `Some("")` when nothing follows it.
fn extract_interest(input: &str) -> Option<String> {
    input
        .find(DECLARE_PHRASE)
        .map(|idx| input[idx + DECLARE_PHRASE.len()..].trim().to_string())
}
