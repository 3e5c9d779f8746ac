//! Error types for the assistant
//!
//! Handler failures are classified and always recoverable; session errors
//! cover the terminal and configuration.

use thiserror::Error;

/// Classified failure raised by a command handler
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Lookup of a name absent from the store
    #[error("Contact not found.")]
    NotFound { name: String },

    /// Wrong number of arguments for a fixed-arity command
    #[error("Enter the argument for the command.")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// Malformed input shape
    #[error("Invalid format. Use: [command] [name] [phone].")]
    BadFormat { input: String },
}

impl CommandError {
    /// Create a new not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a new argument-count error
    pub fn argument_count(command: &'static str, expected: usize, got: usize) -> Self {
        Self::ArgumentCount {
            command,
            expected,
            got,
        }
    }

    /// Create a new bad-format error
    pub fn bad_format(input: impl Into<String>) -> Self {
        Self::BadFormat {
            input: input.into(),
        }
    }
}

/// Session-level error type
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Reading from or writing to the terminal failed
    #[error("Terminal error: {operation} failed")]
    Terminal {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AssistantError {
    /// Create a new terminal error
    pub fn terminal(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::not_found("john").to_string(),
            "Contact not found."
        );
        assert_eq!(
            CommandError::argument_count("add", 2, 1).to_string(),
            "Enter the argument for the command."
        );
        assert_eq!(
            CommandError::bad_format("").to_string(),
            "Invalid format. Use: [command] [name] [phone]."
        );
    }

    #[test]
    fn test_terminal_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = AssistantError::terminal("write", io);
        assert_eq!(err.to_string(), "Terminal error: write failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
