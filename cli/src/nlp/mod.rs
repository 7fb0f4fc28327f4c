//! # SupportBot Language Processing
//!
//! File: cli/src/nlp/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything between a raw line of user input and the lemma list the
//! intent matcher sees:
//! - `model`: Built-in and file-based language models, lemma lookup
//! - `tokenizer`: Word, punctuation and clitic splitting
//! - `preprocess`: The `Preprocessor` combining both
//!
pub mod model;
pub mod preprocess;
pub mod tokenizer;
