//! Caesar lab entry point.
//!
//! # Usage
//!
//! ```bash
//! # Interactive form
//! caesar-lab --shift 3 --text "Hello, World!"
//!
//! # One-shot
//! caesar-lab encrypt --shift 3 "Hello, World!"
//! echo "KHOOR" | caesar-lab decrypt --shift 3
//! caesar-lab wheel --shift 3 --output wheel.svg
//! ```

use std::io;

use caesar_tui::{Cli, Runtime, TerminalDriver, cli, logging};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    if let Some(command) = &args.command {
        logging::init(&args.log_level, args.log_file.as_deref())?;
        cli::run_command(command, io::stdin().lock(), io::stdout().lock())?;
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        logging::init(&args.log_level, Some(path))?;
    }

    let driver = TerminalDriver::new(args.driver_config())?;
    let mut runtime = Runtime::new(driver, args.app_config());

    Ok(runtime.run().await?)
}
