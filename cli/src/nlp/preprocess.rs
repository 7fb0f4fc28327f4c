//! # SupportBot Preprocessor
//!
//! File: cli/src/nlp/preprocess.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a raw utterance into the lemma sequence the intent matcher works on:
//! 1. Lowercase the input
//! 2. Tokenize it (`nlp::tokenizer`)
//! 3. Drop punctuation tokens, and tokens whose text or lemma is a stop word
//! 4. Replace every remaining token with its lemma
//!
//! Feeding the space-joined output back in yields the same tokens again.
//!
use crate::nlp::model::LanguageModel;
use crate::nlp::tokenizer::tokenize;

/// Normalizes user input with a loaded language model.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    model: LanguageModel,
}

impl Preprocessor {
    pub fn new(model: LanguageModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    /// Returns the lemmas of all meaningful tokens in `text`, in input order.
    ///
    /// A token is also dropped when only its lemma is a stop word ("went"
    /// gives "go"), which keeps the output stable when fed back in.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        tokenize(&lowered)
            .into_iter()
            .filter(|token| token.chars().any(char::is_alphanumeric))
            .filter(|token| !self.model.is_stop_word(token))
            .map(|token| self.model.lemma(&token))
            .filter(|lemma| !self.model.is_stop_word(lemma))
            .collect()
    }
}
