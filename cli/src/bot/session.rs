//! # SupportBot Chat Session
//!
//! File: cli/src/bot/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The interactive read loop. It prints the welcome banner, then repeatedly
//! prompts, reads one line, and prints the bot's reply. An exit command
//! (case-insensitive, surrounding whitespace ignored) or the end of input
//! prints the farewell and ends the session.
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers; `main.rs` passes locked stdin and stdout.
//!
use crate::bot::intents;
use crate::core::config::SessionConfig;
use crate::core::error::Result;
use crate::nlp::preprocess::Preprocessor;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const RULE: &str = "------------------------------------------------------";

/// Printed when the user leaves the conversation.
pub const EXIT_FAREWELL: &str = "Goodbye! Have a great day.";

/// One conversation between the user and the bot.
pub struct Session<'a> {
    preprocessor: &'a Preprocessor,
    config: &'a SessionConfig,
}

impl<'a> Session<'a> {
    pub fn new(preprocessor: &'a Preprocessor, config: &'a SessionConfig) -> Self {
        Self {
            preprocessor,
            config,
        }
    }

    fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.config
            .exit_commands
            .iter()
            .any(|cmd| cmd.trim().to_lowercase() == input)
    }

    fn print_banner<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Welcome to the Student Support Chatbot!")?;
        let commands: Vec<String> = self
            .config
            .exit_commands
            .iter()
            .map(|cmd| format!("'{}'", cmd))
            .collect();
        writeln!(
            output,
            "Type {} to end the conversation.",
            commands.join(" or ")
        )?;
        writeln!(output, "{}", RULE)?;
        Ok(())
    }

    fn reply<W: Write>(&self, output: &mut W, text: &str) -> Result<()> {
        writeln!(output, "{}: {}", self.config.bot_label, text)?;
        Ok(())
    }

    /// Runs the read loop until an exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        self.print_banner(&mut output)
            .context("Failed to write welcome banner")?;

        let mut line = String::new();
        let mut turns = 0usize;
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush().context("Failed to flush output")?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("Failed to read user input")?;
            if read == 0 {
                // Keep the farewell off the prompt line.
                writeln!(output)?;
                info!("End of input after {} turn(s).", turns);
                self.reply(&mut output, EXIT_FAREWELL)?;
                break;
            }

            if self.is_exit_command(&line) {
                info!("Exit command received after {} turn(s).", turns);
                self.reply(&mut output, EXIT_FAREWELL)?;
                break;
            }

            let tokens = self.preprocessor.preprocess(&line);
            debug!("Processed user input: {:?}", tokens);
            self.reply(&mut output, intents::respond(&tokens))?;
            turns += 1;
        }
        output.flush().context("Failed to flush output")?;
        Ok(())
    }
}
