//! Configuration management for the assistant
//!
//! Centralizes the session's fixed texts and exit synonyms and provides
//! validation.

use crate::{cli::Args, error::AssistantError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Text written before each read, without a newline
    pub prompt: String,
    /// Banner printed once at session start
    pub greeting: String,
    /// Message printed when an exit synonym is entered
    pub farewell: String,
    /// Lower-case tokens that end the session
    pub exit_commands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            prompt: "Enter a command: ".to_string(),
            greeting: "Welcome to the assistant bot!".to_string(),
            farewell: "Good bye!".to_string(),
            exit_commands: vec!["close".to_string(), "exit".to_string()],
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AssistantError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AssistantError> {
        if self.exit_commands.is_empty() {
            return Err(AssistantError::config(
                "at least one exit command is required",
            ));
        }

        for command in &self.exit_commands {
            if command.trim().is_empty() {
                return Err(AssistantError::config("exit command must not be blank"));
            }
            if *command != command.to_lowercase() {
                return Err(AssistantError::config(format!(
                    "exit command must be lower-case: {command}"
                )));
            }
        }

        Ok(())
    }

    /// Whether a parsed (lower-cased) command token ends the session
    pub fn is_exit_command(&self, command: &str) -> bool {
        self.exit_commands.iter().any(|c| c == command)
    }
}
