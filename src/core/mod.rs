//! Core functionality for the assistant
//!
//! Contains the contact store, command parsing, the command handlers and
//! the loop that dispatches between them.

pub mod contacts;
pub mod dispatch;
pub mod handlers;
pub mod parser;

pub use contacts::{Contact, ContactStore};
pub use dispatch::{SessionState, Step, run_session, step};
pub use handlers::Command;
pub use parser::{ParsedCommand, parse_input};
