//! Command line interface.
//!
//! Without a subcommand `caesar-lab` opens the interactive form. The
//! subcommands are one-shot: they transform text or export the wheel and exit.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    time::Duration,
};

use caesar_app::AppConfig;
use caesar_core::{
    Mode, WheelGeometry, parse_shift, render_wheel_svg, rotation_degrees, transform,
};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::terminal::DriverConfig;

/// Errors from the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log subscriber could not be installed.
    #[error("failed to install logging: {0}")]
    Logging(#[from] TryInitError),
}

/// Caesar Cipher Learning Lab
#[derive(Parser, Debug)]
#[command(name = "caesar-lab")]
#[command(about = "Learn the Caesar cipher with an animated cipher wheel")]
#[command(version)]
pub struct Cli {
    /// One-shot command; omit to open the interactive form
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Initial shift
    #[arg(
        short,
        long,
        default_value = "3",
        value_parser = parse_shift,
        allow_negative_numbers = true
    )]
    pub shift: i64,

    /// Initial mode (encrypt or decrypt)
    #[arg(short, long, default_value = "encrypt")]
    pub mode: Mode,

    /// Initial message
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Animation frame interval in milliseconds
    #[arg(long, default_value = "16")]
    pub tick_ms: u64,

    /// Write logs to this file (the interactive form logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

impl Cli {
    /// Initial form values.
    pub fn app_config(&self) -> AppConfig {
        AppConfig { text: self.text.clone(), shift: self.shift, mode: self.mode }
    }

    /// Terminal driver settings.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig { tick_rate: Duration::from_millis(self.tick_ms.max(1)) }
    }
}

/// One-shot subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encrypt TEXT (or stdin) and print the result
    Encrypt(TransformArgs),

    /// Decrypt TEXT (or stdin) and print the result
    Decrypt(TransformArgs),

    /// Export the cipher wheel at rest as SVG
    Wheel(WheelArgs),
}

/// Arguments of `encrypt` and `decrypt`.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct TransformArgs {
    /// Number of positions to shift
    #[arg(short, long, value_parser = parse_shift, allow_negative_numbers = true)]
    pub shift: i64,

    /// Text to transform; read from stdin when absent
    pub text: Option<String>,
}

/// Arguments of `wheel`.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct WheelArgs {
    /// Shift the inner ring is turned by
    #[arg(short, long, value_parser = parse_shift, allow_negative_numbers = true)]
    pub shift: i64,

    /// Output file; stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run a one-shot command.
///
/// # Errors
///
/// Returns an error if reading `input` or writing the output fails.
pub fn run_command<R: Read, W: Write>(
    command: &Command,
    input: R,
    out: W,
) -> Result<(), CliError> {
    match command {
        Command::Encrypt(args) => run_transform(args, Mode::Encrypt, input, out),
        Command::Decrypt(args) => run_transform(args, Mode::Decrypt, input, out),
        Command::Wheel(args) => match &args.output {
            Some(path) => {
                let file = File::create(path)?;
                write_wheel(args.shift, file)?;
                tracing::info!(path = %path.display(), shift = args.shift, "wheel written");
                Ok(())
            },
            None => write_wheel(args.shift, out),
        },
    }
}

fn run_transform<R: Read, W: Write>(
    args: &TransformArgs,
    mode: Mode,
    mut input: R,
    mut out: W,
) -> Result<(), CliError> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            strip_line_ending(buf)
        },
    };

    tracing::debug!(
        %mode,
        shift = args.shift,
        chars = text.chars().count(),
        "one-shot transform"
    );

    let result = transform(&text, args.shift, mode);
    writeln!(out, "{result}")?;
    out.flush()?;
    Ok(())
}

/// Drop the final line ending of piped input.
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Write the wheel for `shift` at rest as an SVG document.
///
/// The rotation is reduced to a single turn; the picture at rest is the same.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_wheel<W: Write>(shift: i64, mut out: W) -> Result<(), CliError> {
    let rotation = rotation_degrees(shift.rem_euclid(26) as f64);
    out.write_all(render_wheel_svg(WheelGeometry::default(), rotation).as_bytes())?;
    out.flush()?;
    Ok(())
}
