//! Session entry point for the CLI

use crate::{
    config::Config,
    core::{SessionState, run_session},
    utils::Terminal,
};
use anyhow::Context;
use std::io;
use tracing::{debug, instrument};

/// Run an interactive session on the process's stdin and stdout
#[instrument(skip(config))]
pub fn execute_session(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    let state = run_session(config, &mut terminal).context("Interactive session failed")?;

    if state == SessionState::Running {
        debug!("Session ended by end of input");
    }
    Ok(())
}
