//! Application layer for the Caesar cipher lab
//!
//! Pure state machine and generic runtime for the cipher form, so the same
//! code that runs in the terminal runs under scripted tests.
//!
//! # Components
//!
//! - [`App`]: form state machine (message, shift, mode, result, wheel)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, SHIFT_STEP_RANGE};
pub use config::AppConfig;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{Focus, TextField};
