//! Fuzz target for the cipher transform
//!
//! Ensure the transform is total and lossless over arbitrary input (HIGH priority)
//!
//! # Strategy
//!
//! - Arbitrary UTF-8: control characters, combining marks, letters whose
//!   uppercase form expands to several characters
//! - Arbitrary shifts: the full i64 range, including MIN and MAX
//! - Shift text: arbitrary strings through the shift parser
//!
//! # Invariants
//!
//! - NEVER panic, for any text and any shift
//! - Output length equals the uppercased input length
//! - Decrypt undoes Encrypt
//! - Characters outside A-Z pass through at their position

#![no_main]

use arbitrary::Arbitrary;
use caesar_core::{parse_shift, transform, CipherRequest, Mode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct Input {
    text: String,
    shift: i64,
    decrypt: bool,
    shift_text: String,
}

fuzz_target!(|input: Input| {
    let mode = if input.decrypt { Mode::Decrypt } else { Mode::Encrypt };
    let upper = input.text.to_uppercase();

    let output = transform(&input.text, input.shift, mode);
    assert_eq!(output.as_str().chars().count(), upper.chars().count());

    for (before, after) in upper.chars().zip(output.as_str().chars()) {
        if !before.is_ascii_uppercase() {
            assert_eq!(before, after);
        } else {
            assert!(after.is_ascii_uppercase());
        }
    }

    let restored = transform(output.as_str(), input.shift, mode.toggled());
    assert_eq!(restored.as_str(), upper);

    // Request form agrees with the free function
    let request = CipherRequest::new(input.text.clone(), input.shift, mode);
    assert_eq!(request.process(), output);

    // Parser never panics; accepted values round-trip through Display
    if let Ok(shift) = parse_shift(&input.shift_text) {
        assert_eq!(parse_shift(&shift.to_string()), Ok(shift));
    }
});
