#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use assistant_bot::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    let config = Config::from_args(&args)?;

    cli::execute_session(&config)
}
