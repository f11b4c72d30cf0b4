//! # Session Memory
//!
//! File: cli/src/bot/memory.rs
//! Author: The CyberBot Contributors
//! Repository: https://github.com/cyberbot/cyberbot
//!
//! Holds the one thing CyberBot remembers during a session: the interest the
//! user last declared. Lives only as long as the process.

/// Per-session state. Starts empty; a new declaration overwrites the old one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionMemory {
    interest: Option<String>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `interest` as-is, replacing any earlier value. An empty string is
    /// still a stored interest.
    pub fn remember(&mut self, interest: impl Into<String>) {
        self.interest = Some(interest.into());
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    /// True when the stored interest text contains `keyword`.
    pub fn is_interested_in(&self, keyword: &str) -> bool {
        self.interest
            .as_deref()
            .is_some_and(|interest| interest.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let memory = SessionMemory::new();
        assert_eq!(memory.interest(), None);
        assert!(!memory.is_interested_in("phishing"));
    }

    #[test]
    fn remember_overwrites() {
        let mut memory = SessionMemory::new();
        memory.remember("phishing");
        memory.remember("password managers");
        assert_eq!(memory.interest(), Some("password managers"));
        assert!(memory.is_interested_in("password"));
        assert!(!memory.is_interested_in("phishing"));
    }

    #[test]
    fn empty_interest_is_kept() {
        let mut memory = SessionMemory::new();
        memory.remember("");
        assert_eq!(memory.interest(), Some(""));
        assert!(!memory.is_interested_in("scam"));
    }
}
