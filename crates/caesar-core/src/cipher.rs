//! Caesar shift over the fixed alphabet.
//!
//! The transform uppercases its input, then moves every letter in `A..=Z`
//! forward (encrypt) or backward (decrypt) by the shift, wrapping at the end
//! of the alphabet. Everything else passes through untouched, so the output
//! always has as many characters as the uppercased input.
//!
//! Any `i64` shift is accepted. The shift is reduced modulo 26 before it is
//! combined with a letter's position, so `i64::MIN` and `i64::MAX` are as
//! valid as `3`.

use std::{fmt, str::FromStr};

use crate::{
    CipherError,
    alphabet::{ALPHABET_LEN, index_of, letter_at},
};

/// Direction of the shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Shift letters forward.
    #[default]
    Encrypt,
    /// Shift letters backward.
    Decrypt,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("Encrypt"),
            Self::Decrypt => f.write_str("Decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnknownMode { input: s.to_string() }),
        }
    }
}

/// A single transform invocation, built from the current field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    /// Text to transform. Any characters.
    pub text: String,
    /// Shift amount. Conventionally `0..=25` but any value wraps.
    pub shift: i64,
    /// Shift direction.
    pub mode: Mode,
}

impl CipherRequest {
    /// Create a request.
    pub fn new(text: impl Into<String>, shift: i64, mode: Mode) -> Self {
        Self { text: text.into(), shift, mode }
    }

    /// Run the transform for this request.
    pub fn process(&self) -> CipherResult {
        transform(&self.text, self.shift, self.mode)
    }
}

/// Output of a transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CipherResult(String);

impl CipherResult {
    /// Transformed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CipherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Forward offset in `0..26` that `mode` applies for `shift`.
///
/// Decrypting by `s` is encrypting by `-s`; both are folded into a single
/// non-negative offset here.
pub fn effective_offset(shift: i64, mode: Mode) -> u8 {
    let forward = shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8;
    match mode {
        Mode::Encrypt => forward,
        Mode::Decrypt => (ALPHABET_LEN - forward) % ALPHABET_LEN,
    }
}

/// Shift a single character. Characters outside `A..=Z` are returned as is.
pub fn shift_char(c: char, shift: i64, mode: Mode) -> char {
    apply_offset(c, effective_offset(shift, mode))
}

/// Uppercase `text` and shift every letter by `shift` in direction `mode`.
pub fn transform(text: &str, shift: i64, mode: Mode) -> CipherResult {
    let offset = effective_offset(shift, mode);
    CipherResult(text.to_uppercase().chars().map(|c| apply_offset(c, offset)).collect())
}

/// Parse a shift as typed into a numeric field.
///
/// Surrounding whitespace is ignored and an empty field reads as `0`.
pub fn parse_shift(input: &str) -> Result<i64, CipherError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| CipherError::InvalidShift { input: input.to_string() })
}

fn apply_offset(c: char, offset: u8) -> char {
    match index_of(c) {
        // Both operands are below 26, the sum cannot overflow a u8
        Some(index) => letter_at(index + offset),
        None => c,
    }
}
