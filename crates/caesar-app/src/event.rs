//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine: user interactions (keyboard, resize)
//! and animation ticks injected by the runtime.

use std::time::Duration;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Animation tick.
    Tick {
        /// Time since the previous tick.
        elapsed: Duration,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
