//! # SupportBot Tokenizer
//!
//! File: cli/src/nlp/tokenizer.rs
//! Author: Christi Mahu
//!
//! Splits text into word, punctuation and clitic tokens in a single regex
//! pass. Every token it returns tokenizes to itself again.
//!
//! - Words are runs of letters, digits and marks. A single `'` or `.`
//!   between two such runs stays inside the word (`o'clock`, `3.5`).
//! - Every other non-space character is a token of its own, so hyphens and
//!   slashes split words (`e-mail` gives `e`, `-`, `mail`).
//! - English clitics are split off the end of a word (`what's` gives `what`
//!   and `'s`, `can't` gives `ca` and `n't`).
//!
//! ```text
//! "What's up, e-mail?"  ->  ["What", "'s", "up", ",", "e", "-", "mail", "?"]
//! ```
//!
use once_cell::sync::Lazy;
use regex::Regex;

/// English clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'m", "'d"];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"'(?:re|ve|ll|s|m|d)\b|[\p{Alphabetic}\p{N}\p{M}]+(?:['.][\p{Alphabetic}\p{N}\p{M}]+)*|\S",
    )
    .expect("Failed to compile token regex")
});

/// Splits `text` into tokens. No case folding is done here.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.replace(['’', '‘'], "'");
    let mut tokens = Vec::new();
    for found in TOKEN_RE.find_iter(&normalized) {
        push_word(found.as_str(), &mut tokens);
    }
    tokens
}

/// Pushes `word`, splitting clitics off its end. `can't've` gives `ca`,
/// `n't`, `'ve`.
fn push_word(word: &str, tokens: &mut Vec<String>) {
    let mut stem = word;
    let mut clitics = Vec::new();
    while let Some((rest, clitic)) = split_clitic(stem) {
        clitics.push(clitic);
        stem = rest;
    }
    tokens.push(stem.to_string());
    tokens.extend(clitics.into_iter().rev().map(str::to_string));
}

fn split_clitic(word: &str) -> Option<(&str, &'static str)> {
    CLITICS.iter().find_map(|clitic| {
        let stem = word.strip_suffix(clitic)?;
        let ends_in_word = stem.chars().next_back().is_some_and(char::is_alphanumeric);
        ends_in_word.then_some((stem, *clitic))
    })
}
