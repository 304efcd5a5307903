//! Caesar cipher core
//!
//! Pure building blocks for the Caesar cipher lab. No I/O, no clocks: every
//! function here is deterministic and can be tested in isolation from any
//! frontend.
//!
//! # Components
//!
//! - [`alphabet`]: the fixed `A..=Z` mapping shared by everything else
//! - [`transform`]: the cipher itself, total over all text and all `i64` shifts
//! - [`WheelGeometry`]: letter placement for the two-ring cipher wheel
//! - [`Spring`]: damped spring that animates the wheel toward its rotation
//! - [`render_wheel_svg`]: standalone SVG export of the wheel
//!
//! ```
//! use caesar_core::{Mode, transform};
//!
//! let secret = transform("Hello, World!", 3, Mode::Encrypt);
//! assert_eq!(secret.as_str(), "KHOOR, ZRUOG!");
//! assert_eq!(transform(secret.as_str(), 3, Mode::Decrypt).as_str(), "HELLO, WORLD!");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
mod cipher;
mod error;
pub mod spring;
pub mod svg;
pub mod wheel;

pub use cipher::{
    CipherRequest, CipherResult, Mode, effective_offset, parse_shift, shift_char, transform,
};
pub use error::CipherError;
pub use spring::{Spring, SpringConfig};
pub use svg::{WheelSvg, render_wheel_svg};
pub use wheel::{WheelGeometry, WheelLetter, rotation_degrees};
