//! # SupportBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the SupportBot
//! application. Only one failure is part of the normal user experience, a
//! language model that cannot be found at startup. Everything else
//! (unreadable config files, malformed model files, broken terminals) is
//! reported as a plain error and ends the process.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `SupportbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```text
//! // Return a specific error type
//! return Err(SupportbotError::ModelNotFound { name: name.to_string() })?;
//!
//! // Detect the missing-model case at the top level
//! if let Some(SupportbotError::ModelNotFound { .. }) = err.downcast_ref::<SupportbotError>() {
//!     println!("{}", missing_model_instruction(..));
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the SupportBot application.
#[derive(Error, Debug)]
pub enum SupportbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Language model '{name}' not found.")]
    ModelNotFound { name: String },

    #[error("Language model '{name}' is invalid: {reason}")]
    InvalidModel { name: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
