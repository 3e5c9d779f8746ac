//! Command line parsing
//!
//! Splits one line of user input into a command token and its arguments.

use crate::error::CommandError;
use tracing::{debug, instrument};

/// A command token with its arguments, produced once per input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command token
    pub command: String,
    /// Remaining tokens in their original case
    pub args: Vec<String>,
}

/// Parse raw user input into a command and argument list.
///
/// Tokens are separated by runs of whitespace; there is no quoting.
/// A line without any token is a [`CommandError::BadFormat`].
#[instrument]
pub fn parse_input(line: &str) -> Result<ParsedCommand, CommandError> {
    let mut tokens = line.split_whitespace();

    let command = tokens
        .next()
        .ok_or_else(|| CommandError::bad_format(line))?
        .to_lowercase();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    debug!("Parsed command '{}' with {} argument(s)", command, args.len());
    Ok(ParsedCommand { command, args })
}
