//! Error types for parsing cipher parameters.
//!
//! The transform itself is total and never fails. Errors only arise at the
//! boundary where user-supplied text is turned into a shift or a mode.

use thiserror::Error;

/// Errors produced when parsing cipher parameters from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Shift text is not a decimal integer that fits in an `i64`.
    #[error("invalid shift {input:?}: expected an integer")]
    InvalidShift {
        /// The rejected input, as typed.
        input: String,
    },

    /// Mode text is neither encrypt nor decrypt.
    #[error("unknown mode {input:?}: expected \"encrypt\" or \"decrypt\"")]
    UnknownMode {
        /// The rejected input, as typed.
        input: String,
    },
}
