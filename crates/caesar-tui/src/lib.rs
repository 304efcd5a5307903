//! Terminal UI for the Caesar cipher lab
//!
//! A thin shell over [`caesar_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`caesar_app::Runtime`].
//!
//! Besides the interactive form this crate carries the `caesar-lab` command
//! line: one-shot encrypt/decrypt, SVG export of the wheel, and log setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use caesar_app::{App, AppAction, AppConfig, AppEvent, Driver, KeyInput, Runtime};
pub use cli::{Cli, CliError, Command};
pub use terminal::{DriverConfig, TerminalDriver, TerminalError};
