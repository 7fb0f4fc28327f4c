//! # SupportBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the SupportBot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and the language model
//! - Running the interactive chat session on stdin/stdout
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the built-in English model
//! supportbot
//!
//! # Use a custom model file and show debug logs (processed tokens per turn)
//! supportbot -vv --model ~/models/campus-en.toml
//! ```
//!
//! Startup flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load and validate configuration, apply `--model`
//! 4. Load the language model (a missing model prints an instruction and exits normally)
//! 5. Run the session until an exit command or end of input
//!
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Intent matching and the read loop
mod common; // Shared utilities (fs)
mod core; // Core infrastructure (errors, config)
mod nlp; // Tokenizer, language model, preprocessing

use crate::bot::session::Session;
use crate::core::config;
use crate::core::error::{Result, SupportbotError};
use crate::nlp::model::{missing_model_instruction, LanguageModel};
use crate::nlp::preprocess::Preprocessor;

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "supportbot",
    about = "🎓 SupportBot: A rule-based student support chatbot",
    long_about = "Answers common student questions from a fixed set of responses.\n\
                  Type 'exit' or 'quit' (or send end of input) to leave the conversation.",
    version
)]
struct Cli {
    /// Language model: the built-in 'en-small' or a path to a model TOML file.
    #[arg(short, long, env = "SUPPORTBOT_MODEL")]
    model: Option<String>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_config().context("Failed to load configuration")?;
    if let Some(model) = cli.model {
        tracing::info!("Using language model from command line: {}", model);
        config.model.name = model;
        config::expand_config_paths(&mut config);
        config::validate_config(&config).context("Configuration validation failed")?;
    }

    let model = match LanguageModel::load(&config.model.name) {
        Ok(model) => model,
        Err(e) => {
            if let Some(SupportbotError::ModelNotFound { name }) =
                e.downcast_ref::<SupportbotError>()
            {
                tracing::info!("{}", e);
                println!("{}", missing_model_instruction(name));
                return Ok(());
            }
            return Err(e);
        }
    };
    println!(
        "Language model '{}' loaded successfully for preprocessing.",
        model.name()
    );

    let preprocessor = Preprocessor::new(model);
    tracing::debug!(
        "Preprocessing with '{}': {}",
        preprocessor.model().name(),
        preprocessor.model().description()
    );
    let session = Session::new(&preprocessor, &config.session);
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("SupportBot failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

