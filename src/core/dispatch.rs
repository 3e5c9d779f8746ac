//! Read-parse-execute-print loop
//!
//! Drives one interactive session: each input line is parsed, routed
//! through the command table and answered before the next line is read.

use crate::{
    config::Config,
    core::{contacts::ContactStore, handlers::Command, parser::parse_input},
    error::Result,
    utils::terminal::Terminal,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What a single input line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing to print; read the next line
    Skip,
    /// Print the text and read the next line
    Reply(String),
    /// Print the farewell and stop
    Exit(String),
}

/// Process one input line against the store.
///
/// Handler failures are turned into their user-facing message here and
/// never escape the step.
#[instrument(skip(config, store))]
pub fn step(config: &Config, line: &str, store: &mut ContactStore) -> Step {
    if line.trim().is_empty() {
        return Step::Skip;
    }

    let parsed = match parse_input(line) {
        Ok(parsed) => parsed,
        Err(e) => return Step::Reply(e.to_string()),
    };

    if config.is_exit_command(&parsed.command) {
        return Step::Exit(config.farewell.clone());
    }

    let Some(command) = Command::from_token(&parsed.command) else {
        debug!("Unknown command '{}'", parsed.command);
        return Step::Reply("Invalid command.".to_string());
    };

    match command.execute(&parsed.args, store) {
        Ok(text) if text.is_empty() => Step::Skip,
        Ok(text) => Step::Reply(text),
        Err(e) => {
            debug!("Command '{}' failed: {:?}", command.name(), e);
            Step::Reply(e.to_string())
        }
    }
}

/// Run a full session over `terminal` until an exit command or end of input.
///
/// The store lives only for the duration of this call. The returned state is
/// still `Running` when input ended before an exit command was seen.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    terminal: &mut Terminal<R, W>,
) -> Result<SessionState> {
    let mut store = ContactStore::new();
    let mut state = SessionState::Running;

    terminal.write_line(&config.greeting)?;
    info!("Session started");

    while state == SessionState::Running {
        let Some(line) = terminal.read_line(&config.prompt)? else {
            info!("Input closed, discarding {} contact(s)", store.len());
            break;
        };

        match step(config, &line, &mut store) {
            Step::Skip => {}
            Step::Reply(text) => terminal.write_line(&text)?,
            Step::Exit(farewell) => {
                terminal.write_line(&farewell)?;
                state = SessionState::Terminated;
            }
        }
    }

    info!("Session ended with {} contact(s)", store.len());
    Ok(state)
}
