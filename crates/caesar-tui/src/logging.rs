//! Log subscriber setup.
//!
//! The interactive form owns stdout, so it only logs when given a file.
//! One-shot commands log to stderr.

use std::{fs::File, io, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::CliError;

/// Install the global subscriber writing to `log_file`, or to stderr.
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .try_init()?;
        },
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .try_init()?;
        },
    }

    Ok(())
}
