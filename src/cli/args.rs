//! Command-line argument parsing

use clap::Parser;

/// Assistant bot - an interactive address book for one terminal session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "assistant-bot")]
pub struct Args {
    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
