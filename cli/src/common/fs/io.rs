//! # SupportBot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!

//! ## Overview
//!
//! This module centralizes the filesystem reads SupportBot performs: the
//! user and project configuration files, and language model files given by
//! path. It wraps `std::fs` so that every failure carries the offending path.
//!
//! ## Usage
//!
//! ```text
//! use crate::common::fs::io;
//!
//! let content = io::read_file_to_string(Path::new(".supportbot.toml"))?;
//! ```
//!
use crate::core::error::{Result, SupportbotError}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::debug; // Logging utilities

/// Reads the entire content of a file into a string.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to read.
///
/// # Errors
///
/// Returns an `Err` if the path is a directory (`SupportbotError::FileSystem`),
/// or if the file cannot be found, opened, or read, with context indicating
/// which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    if path.is_dir() {
        anyhow::bail!(SupportbotError::FileSystem(format!(
            "Expected a file but found a directory: {:?}",
            path
        )));
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}
