//! Initial form values.

use caesar_core::Mode;

/// Starting state of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial message.
    pub text: String,
    /// Initial shift.
    pub shift: i64,
    /// Initially selected mode.
    pub mode: Mode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { text: String::new(), shift: 3, mode: Mode::Encrypt }
    }
}
