//! # SupportBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! Shared helpers that are not specific to the language model or the chat
//! session. Currently this is only filesystem access, used by configuration
//! loading and by file-based language models.
//!

/// Utilities for filesystem operations.
pub mod fs;
