//! # SupportBot Conversation
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! - `intents`: Phrase table and canned responses
//! - `session`: The interactive read loop
//!
pub mod intents;
pub mod session;
