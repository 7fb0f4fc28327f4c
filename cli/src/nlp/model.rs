//! # SupportBot Language Model
//!
//! File: cli/src/nlp/model.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A language model holds everything the preprocessor needs to know about a
//! language: which tokens are stop words, which irregular forms map to which
//! lemma, which words are already in base form, and an ordered list of suffix
//! rules for everything else.
//!
//! ## Architecture
//!
//! - The built-in model (`en-small`) is compiled into the binary from
//!   `cli/assets/en-small.toml`.
//! - Any other model name is treated as a path to a TOML file with the same
//!   schema. A path that does not point to a file yields
//!   `SupportbotError::ModelNotFound`, which `main.rs` turns into the
//!   "model not found" instruction.
//! - Model files are validated on load. Lemmatization relies on the checks in
//!   `validate_model_file` to terminate and to be stable when applied twice.
//!
//! ## Lemmatization
//!
//! `LanguageModel::lemma` repeats the following until nothing changes:
//! 1. A known lemma (an `index` entry or any `[lemmas]` value) is returned as is.
//! 2. A `[lemmas]` key is replaced by its value.
//! 3. Words that are not purely alphabetic are returned as is.
//! 4. The first applicable suffix rule is applied.
//!
use crate::common::fs::io;
use crate::core::error::{Result, SupportbotError};
use anyhow::Context;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Name of the model that ships inside the binary.
pub const BUILTIN_MODEL_NAME: &str = "en-small";

const BUILTIN_MODEL_SOURCE: &str = include_str!("../../assets/en-small.toml");

/// On-disk representation of a model file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ModelFile {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    stop_words: Vec<String>,
    #[serde(default)]
    index: Vec<String>,
    #[serde(default)]
    lemmas: HashMap<String, String>,
    #[serde(default)]
    rules: Vec<SuffixRule>,
}

/// Replaces `suffix` with `replacement` at the end of a word.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
    /// Minimum number of characters that must remain once the suffix is removed.
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
    /// Only fire when the result is a known lemma.
    #[serde(default)]
    pub requires_known: bool,
}

fn default_min_stem() -> usize {
    2
}

impl SuffixRule {
    fn apply(&self, word: &str, known: &HashSet<String>) -> Option<String> {
        let stem = word.strip_suffix(self.suffix.as_str())?;
        if stem.chars().count() < self.min_stem {
            return None;
        }
        let candidate = format!("{}{}", stem, self.replacement);
        if self.requires_known && !known.contains(&candidate) {
            return None;
        }
        Some(candidate)
    }
}

/// A loaded and validated language model.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    name: String,
    description: String,
    stop_words: HashSet<String>,
    exceptions: HashMap<String, String>,
    known: HashSet<String>,
    rules: Vec<SuffixRule>,
}

impl LanguageModel {
    /// Loads a model by name. `en-small` is the built-in model; anything else
    /// is read as a model file path.
    pub fn load(name: &str) -> Result<Self> {
        if name == BUILTIN_MODEL_NAME {
            return Self::builtin();
        }
        let path = Path::new(name);
        if !path.is_file() {
            debug!("No model file at {}", path.display());
            return Err(SupportbotError::ModelNotFound {
                name: name.to_string(),
            }
            .into());
        }
        info!("Loading language model from file: {}", path.display());
        let source = io::read_file_to_string(path)?;
        Self::from_toml_str(&source, name)
    }

    /// Returns the model compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_MODEL_SOURCE, BUILTIN_MODEL_NAME)
            .context("Built-in language model is corrupt")
    }

    /// Parses and validates a model from TOML source. `origin` names the
    /// source (a path or the built-in name) in error messages.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self> {
        let file: ModelFile = toml::from_str(source)
            .with_context(|| format!("Failed to parse language model '{}'", origin))?;
        validate_model_file(&file).map_err(|reason| SupportbotError::InvalidModel {
            name: origin.to_string(),
            reason,
        })?;

        let exceptions: HashMap<String, String> = file
            .lemmas
            .into_iter()
            .map(|(form, lemma)| (form.to_lowercase(), lemma))
            .collect();
        let known = file
            .index
            .iter()
            .map(|word| word.to_lowercase())
            .chain(exceptions.values().cloned())
            .collect();
        let model = Self {
            name: file.name,
            description: file.description,
            stop_words: file.stop_words.iter().map(|w| w.to_lowercase()).collect(),
            exceptions,
            known,
            rules: file.rules,
        };
        debug!(
            "Language model '{}' ({}): {} stop words, {} exceptions, {} known lemmas, {} rules",
            model.name,
            model.description,
            model.stop_words.len(),
            model.exceptions.len(),
            model.known.len(),
            model.rules.len()
        );
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Reduces a lowercase word to its lemma. Applying `lemma` to its own
    /// output returns the same string.
    pub fn lemma(&self, word: &str) -> String {
        let mut current = word.to_string();
        loop {
            if self.known.contains(&current) {
                return current;
            }
            if let Some(base) = self.exceptions.get(&current) {
                return base.clone();
            }
            if !current.chars().all(char::is_alphabetic) {
                return current;
            }
            let next = self
                .rules
                .iter()
                .find_map(|rule| rule.apply(&current, &self.known));
            match next {
                Some(next) if next != current => current = next,
                _ => return current,
            }
        }
    }
}

/// Text printed (to stdout) when the configured model cannot be found.
pub fn missing_model_instruction(name: &str) -> String {
    format!(
        "Language model '{}' not found. Please point --model (or [model] name in .supportbot.toml) \
         at a model file, or use the built-in '{}' model.",
        name, BUILTIN_MODEL_NAME
    )
}

fn is_lemma_text(text: &str) -> bool {
    text.chars().all(|c| c.is_alphabetic() && !c.is_uppercase())
}

fn validate_model_file(file: &ModelFile) -> std::result::Result<(), String> {
    if file.name.trim().is_empty() {
        return Err("model name cannot be empty".to_string());
    }
    for (form, lemma) in &file.lemmas {
        if lemma.is_empty() || !is_lemma_text(lemma) {
            return Err(format!(
                "lemma '{}' for '{}' must be lowercase alphabetic",
                lemma, form
            ));
        }
    }
    for rule in &file.rules {
        if rule.suffix.is_empty() {
            return Err("rule suffix cannot be empty".to_string());
        }
        if rule.min_stem == 0 {
            return Err(format!("rule '{}' has min_stem 0", rule.suffix));
        }
        if !is_lemma_text(&rule.replacement) {
            return Err(format!(
                "rule '{}' replacement '{}' must be lowercase alphabetic",
                rule.suffix, rule.replacement
            ));
        }
        if rule.replacement != rule.suffix
            && rule.replacement.chars().count() >= rule.suffix.chars().count()
        {
            return Err(format!(
                "rule '{}' replacement '{}' must be shorter than the suffix",
                rule.suffix, rule.replacement
            ));
        }
    }
    Ok(())
}
