//! # SupportBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for SupportBot, handling loading,
//! merging, validation, and access to configuration data. Every setting has a
//! default that reproduces the stock chatbot, so no configuration file is required.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. The `--model` command-line flag (applied by `main.rs`)
//! 2. Project-specific `.supportbot.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [model]
//! name = "~/models/campus-en.toml"
//!
//! [session]
//! prompt = "Student: "
//! bot_label = "Helpdesk"
//! exit_commands = ["exit", "quit", "q"]
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{Result, SupportbotError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Selects the language model used for preprocessing.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Name of a built-in model, or a path (can use ~) to a model TOML file.
    #[serde(default = "default_model_name")]
    pub name: String,
}

/// Settings for the interactive read loop.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Text printed before reading each line of input.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Label printed in front of every bot reply.
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
    /// Inputs (compared case-insensitively) that end the session.
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            bot_label: default_bot_label(),
            exit_commands: default_exit_commands(),
        }
    }
}

fn default_model_name() -> String {
    crate::nlp::model::BUILTIN_MODEL_NAME.to_string()
}
fn default_prompt() -> String {
    "You: ".to_string()
}
fn default_bot_label() -> String {
    "Chatbot".to_string()
}
fn default_exit_commands() -> Vec<String> {
    vec!["exit".to_string(), "quit".to_string()]
}

const PROJECT_CONFIG_FILENAME: &str = ".supportbot.toml";

/// Loads, merges, expands and validates configuration from all file sources.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "SupportBot", "supportbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        load_config_from_path(&path).map(Some)
    } else {
        debug!("No project configuration file (.supportbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.supportbot.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = SessionConfig::default();
    let mut merged = Config::default();
    merged.model.name = if project_cfg.model.name != default_model_name() {
        project_cfg.model.name
    } else {
        user.model.name
    };
    merged.session.prompt = if project_cfg.session.prompt != defaults.prompt {
        project_cfg.session.prompt
    } else {
        user.session.prompt
    };
    merged.session.bot_label = if project_cfg.session.bot_label != defaults.bot_label {
        project_cfg.session.bot_label
    } else {
        user.session.bot_label
    };
    merged.session.exit_commands = if project_cfg.session.exit_commands != defaults.exit_commands
    {
        project_cfg.session.exit_commands
    } else {
        user.session.exit_commands
    };
    merged
}

/// Expands `~` in the model name when it is used as a path.
pub fn expand_config_paths(config: &mut Config) {
    config.model.name = shellexpand::tilde(&config.model.name).into_owned();
    debug!("Expanded model name: {}", config.model.name);
}

pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.model.name.trim().is_empty() {
        return Err(anyhow!(SupportbotError::Config(
            "Model name cannot be empty.".to_string()
        )));
    }
    if config.session.exit_commands.is_empty() {
        return Err(anyhow!(SupportbotError::Config(
            "At least one exit command is required.".to_string()
        )));
    }
    if config
        .session
        .exit_commands
        .iter()
        .any(|cmd| cmd.trim().is_empty())
    {
        return Err(anyhow!(SupportbotError::Config(
            "Exit commands cannot be blank.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
