//! # Assistant Bot
//!
//! An interactive command-line assistant that keeps an in-memory address
//! book for the length of one session.
//!
//! ## Commands
//!
//! - `hello` greets the user
//! - `add <name> <phone>` saves a new contact
//! - `change <name> <phone>` replaces a saved phone number
//! - `phone <name>` shows a saved phone number
//! - `all` lists every contact in insertion order
//! - `close` / `exit` end the session
//!
//! ## Usage
//!
//! The binary takes no positional arguments; commands are read from stdin.
//! The only flag is `--debug`, which sends debug logs to stderr.
//!
//! ## Example
//!
//! ```
//! use assistant_bot::{config::Config, core::{ContactStore, Step, step}};
//!
//! let config = Config::default();
//! let mut store = ContactStore::new();
//! assert_eq!(
//!     step(&config, "add john 123", &mut store),
//!     Step::Reply("Contact added.".to_string())
//! );
//! assert_eq!(store.get("john"), Some("123"));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr so they never mix with the session transcript.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
