//! Command-line interface module
//!
//! Provides argument parsing and the interactive session entry point.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::execute_session;
