//! # SupportBot Intents
//!
//! File: cli/src/bot/intents.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a preprocessed token list to one of a fixed set of canned responses.
//! The tokens are joined with single spaces and the result is checked, in
//! priority order, for any of the phrases listed for each intent. Matching is
//! plain substring search, so "hi" also matches inside "think". The first
//! intent with a matching phrase wins; `Intent::Default` is used when none do.
//!
use tracing::trace;

/// The intents the bot can recognize, plus the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    SmallTalk,
    TimeOfDay,
    Identity,
    Capability,
    Thanks,
    Help,
    Farewell,
    Default,
}

/// Intents in priority order with the phrases that trigger them.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey", "hola"]),
    (
        Intent::SmallTalk,
        &["how are you", "how are things", "what's up", "you doing"],
    ),
    (
        Intent::TimeOfDay,
        &["good morning", "good afternoon", "good evening"],
    ),
    (Intent::Identity, &["who are you", "what are you", "your name"]),
    (
        Intent::Capability,
        &["what can you do", "help me", "your function", "abilities"],
    ),
    (Intent::Thanks, &["thank", "thanks", "appreciate"]),
    (Intent::Help, &["help"]),
    (Intent::Farewell, &["bye", "goodbye", "farewell", "see you"]),
];

impl Intent {
    /// The fixed reply for this intent.
    pub fn response(self) -> &'static str {
        match self {
            Intent::Greeting => {
                "Hello there! How can I assist you with your university-related questions today?"
            }
            Intent::SmallTalk => {
                "As an AI, I don't have feelings, but I'm ready to help you! How can I assist you?"
            }
            Intent::TimeOfDay => "A pleasant time of day to you too! What's on your mind?",
            Intent::Identity => {
                "I am an AI-powered chatbot designed to assist students with their inquiries \
                 regarding university services, courses, and general information."
            }
            Intent::Capability => {
                "I can answer common questions about university resources, course information, \
                 admissions, and guide you to the right departments. How can I help you specifically?"
            }
            Intent::Thanks => "You're most welcome! I'm glad I could help.",
            Intent::Help => {
                "Yes, I'm here to help! Please tell me what you need assistance with, for example, \
                 'Where can I find information about financial aid?' or 'What are the requirements \
                 for course X?'"
            }
            Intent::Farewell => "Goodbye! Feel free to return anytime if you have more questions.",
            Intent::Default => {
                "I'm designed to answer questions related to student support services. Could you \
                 please rephrase your question, or ask about a specific university topic?"
            }
        }
    }
}

/// Picks the first intent, in priority order, whose phrases occur in the
/// space-joined token list.
pub fn classify(tokens: &[String]) -> Intent {
    let query = tokens.join(" ");
    RULES
        .iter()
        .find(|(intent, phrases)| {
            let hit = phrases.iter().find(|phrase| query.contains(*phrase));
            if let Some(phrase) = hit {
                trace!("Matched {:?} on phrase '{}'", intent, phrase);
            }
            hit.is_some()
        })
        .map_or(Intent::Default, |(intent, _)| *intent)
}

/// Returns the reply for a preprocessed token list.
pub fn respond(tokens: &[String]) -> &'static str {
    classify(tokens).response()
}
