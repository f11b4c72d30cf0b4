//! # Response Dispatcher
//!
//! File: cli/src/bot/dispatcher.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! ## Overview
//!
//! Turns a classified line of input into printed replies. The `Dispatcher` owns
//! everything a reply can depend on: the knowledge tables, the session memory,
//! the user's name, and the random source used to pick tips.
//!
//! ## Reply rules
//!
//! - `DeclareInterest`: remember the interest, confirm, suggest a related tip
//! - `RecallInterest`: repeat the stored interest and suggest a related tip
//! - `Sentiment`: empathetic reply, then a keyword tip if the same input also
//!   names a topic ("I'm worried about phishing")
//! - `Keyword`: a random tip for the topic, personalized when it matches the
//!   stored interest
//! - `Command`: run the bound `CommandAction`
//! - `Unrecognized`: ask the user to rephrase
//!
//! Every reply that includes a topic tip ends with a follow-up prompt for that
//! topic. Command and unrecognized replies never do.
//!
use crate::bot::classifier::{classify, normalize, RuleMatch};
use crate::bot::knowledge::{CommandAction, KnowledgeBase};
use crate::bot::memory::SessionMemory;
use crate::common::ui::{Console, Tone};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::io::{self, Write};
use tracing::debug;

const UNRECOGNIZED_REPLY: &str = "I didn't quite understand that. Could you rephrase?";
const NO_INTEREST_REPLY: &str = "I don't think you've told me your interest yet.";
const NO_RELATED_TIP_REPLY: &str = "I couldn't find a specific tip for that interest, but feel free to ask about phishing, passwords, privacy, or scams!";

const SECURITY_TIPS: [&str; 3] = [
    "Keep your software and OS updated.",
    "Avoid using public Wi-Fi for sensitive info.",
    "Use 2FA on your accounts.",
];

const MENU_ITEMS: [&str; 6] = [
    "Phishing",
    "Password Safety",
    "Privacy",
    "Scams",
    "Security Tips",
    "You can also say how you're feeling or what you're interested in.",
];

/// Prints the "You can ask me about" menu.
pub fn show_options<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    console.line(Tone::MenuHeader, "You can ask me about:")?;
    for item in MENU_ITEMS {
        console.line(Tone::MenuItem, &format!("    {}", item))?;
    }
    Ok(())
}

/// Text of the follow-up invitation for `topic`.
pub fn follow_up_text(topic: &str) -> String {
    format!(
        "Want more tips on {topic}? Just say 'more about {topic}' or ask something else!"
    )
}

pub struct Dispatcher<R: Rng> {
    kb: KnowledgeBase,
    memory: SessionMemory,
    user_name: String,
    rng: R,
}

impl<R: Rng> Dispatcher<R> {
    pub fn new(kb: KnowledgeBase, user_name: impl Into<String>, rng: R) -> Self {
        Self {
            kb,
            memory: SessionMemory::new(),
            user_name: user_name.into(),
            rng,
        }
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Normalizes, classifies and answers one line of raw user input.
    pub fn handle<W: Write>(&mut self, raw_input: &str, console: &mut Console<W>) -> io::Result<()> {
        let input = normalize(raw_input);
        let matched = classify(&self.kb, &input);
        self.dispatch(matched, &input, console)
    }

    /// Prints the reply for `matched`. `input` is the normalized text it was
    /// classified from, rescanned for a keyword on the sentiment path.
    pub fn dispatch<W: Write>(
        &mut self,
        matched: RuleMatch,
        input: &str,
        console: &mut Console<W>,
    ) -> io::Result<()> {
        match matched {
            RuleMatch::DeclareInterest(interest) => {
                self.memory.remember(interest.as_str());
                console.line(
                    Tone::Reply,
                    &format!("Great! I'll remember that you're interested in {}.", interest),
                )?;
                self.suggest_related_tip(&interest, console)?;
            }
            RuleMatch::RecallInterest => match self.memory.interest().map(str::to_owned) {
                Some(interest) => {
                    console.line(
                        Tone::Reply,
                        &format!(
                            "You told me you're interested in {}. Here's something related...",
                            interest
                        ),
                    )?;
                    self.suggest_related_tip(&interest, console)?;
                }
                None => console.line(Tone::Reply, NO_INTEREST_REPLY)?,
            },
            RuleMatch::Sentiment(word) => {
                if let Some(response) = self.kb.sentiments.response(word) {
                    console.line(Tone::Reply, response)?;
                }
                let keyword = self.kb.keywords.first_in(input).map(|e| e.keyword);
                if let Some(keyword) = keyword {
                    if let Some(tip) = self.keyword_tip(keyword) {
                        console.line(Tone::Reply, &format!("Here's a tip on {}: {}", keyword, tip))?;
                        self.show_follow_up(keyword, console)?;
                    }
                }
            }
            RuleMatch::Keyword(keyword) => {
                if let Some(tip) = self.keyword_tip(keyword) {
                    console.line(Tone::Reply, &tip)?;
                    self.show_follow_up(keyword, console)?;
                }
            }
            RuleMatch::Command(phrase) => {
                if let Some(action) = self.kb.commands.action(phrase) {
                    self.run_command(action, console)?;
                }
            }
            RuleMatch::Unrecognized => console.line(Tone::Reply, UNRECOGNIZED_REPLY)?,
        }
        Ok(())
    }

    /// Suggests a tip for the first keyword found inside the interest text.
    fn suggest_related_tip<W: Write>(&mut self, interest: &str, console: &mut Console<W>) -> io::Result<()> {
        let keyword = self.kb.keywords.first_in(interest).map(|e| e.keyword);
        match keyword.and_then(|k| self.random_tip(k).map(|tip| (k, tip))) {
            Some((keyword, tip)) => {
                console.line(
                    Tone::Reply,
                    &format!("Here's a tip related to {}: {}", keyword, tip),
                )?;
                self.show_follow_up(keyword, console)
            }
            None => {
                debug!("No keyword inside interest {:?}", interest);
                console.line(Tone::Reply, NO_RELATED_TIP_REPLY)
            }
        }
    }

    fn show_follow_up<W: Write>(&self, topic: &str, console: &mut Console<W>) -> io::Result<()> {
        console.blank_line()?;
        console.line(Tone::FollowUp, &follow_up_text(topic))
    }

    fn run_command<W: Write>(&self, action: CommandAction, console: &mut Console<W>) -> io::Result<()> {
        debug!("Running command {:?}", action);
        match action {
            CommandAction::ShowSecurityTips => {
                console.line(Tone::Tips, "Here are 3 quick security tips:")?;
                for (i, tip) in SECURITY_TIPS.iter().enumerate() {
                    console.line(Tone::Tips, &format!("   {}. {}", i + 1, tip))?;
                }
                Ok(())
            }
            CommandAction::StatusGreeting => console.line(
                Tone::Reply,
                &format!(
                    "I'm doing great, {}! Ready to help you stay safe online.",
                    self.user_name
                ),
            ),
            CommandAction::ShowOptions => show_options(console),
        }
    }

    /// A random tip for `keyword`, prefixed when it matches the stored interest.
    fn keyword_tip(&mut self, keyword: &str) -> Option<String> {
        let tip = self.random_tip(keyword)?;
        if self.memory.is_interested_in(keyword) {
            Some(format!("Since you're interested in {}, here's a tip: {}", keyword, tip))
        } else {
            Some(tip.to_string())
        }
    }

    fn random_tip(&mut self, keyword: &str) -> Option<&'static str> {
        self.kb.keywords.tips(keyword)?.choose(&mut self.rng).copied()
    }
}
