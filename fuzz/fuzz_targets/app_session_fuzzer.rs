//! Fuzz target for the form state machine
//!
//! Ensure no key or timing sequence corrupts the form (MEDIUM priority)
//!
//! # Strategy
//!
//! - Key storms: arbitrary keys in any focus, including signs and digits in
//!   the shift field at every cursor position
//! - Timing: ticks from zero to several seconds, interleaved with edits
//! - Programmatic: huge shifts set directly, bypassing the field filter
//!
//! # Invariants
//!
//! - NEVER panic
//! - Cursors stay within their buffers
//! - A valid shift field parses to the shift in use
//! - Process always stores exactly the transform of the current fields
//! - The wheel rotation stays finite

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use caesar_app::{App, AppAction, AppEvent, KeyInput};
use caesar_core::{parse_shift, transform};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Key(Key),
    Tick { millis: u16 },
    Resize { cols: u16, rows: u16 },
    SetShift(i64),
    Process,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Key {
    Char(char),
    Digit(u8),
    Minus,
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    fn input(self) -> KeyInput {
        match self {
            Self::Char(c) => KeyInput::Char(c),
            Self::Digit(d) => KeyInput::Char(char::from(b'0' + d % 10)),
            Self::Minus => KeyInput::Char('-'),
            Self::Enter => KeyInput::Enter,
            Self::Backspace => KeyInput::Backspace,
            Self::Delete => KeyInput::Delete,
            Self::Tab => KeyInput::Tab,
            Self::BackTab => KeyInput::BackTab,
            Self::Left => KeyInput::Left,
            Self::Right => KeyInput::Right,
            Self::Up => KeyInput::Up,
            Self::Down => KeyInput::Down,
            Self::Home => KeyInput::Home,
            Self::End => KeyInput::End,
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut app = App::default();

    for op in ops {
        let actions = match op {
            Op::Key(key) => app.handle(AppEvent::Key(key.input())),
            Op::Tick { millis } => {
                app.handle(AppEvent::Tick { elapsed: Duration::from_millis(u64::from(millis)) })
            }
            Op::Resize { cols, rows } => app.handle(AppEvent::Resize(cols, rows)),
            Op::SetShift(shift) => app.set_shift(shift),
            Op::Process => {
                let actions = app.process();
                if app.shift_is_valid() {
                    let expected = transform(app.text().buffer(), app.shift(), app.mode());
                    assert_eq!(app.result(), Some(&expected));
                }
                actions
            }
        };

        assert!(!actions.contains(&AppAction::Quit));
        assert!(app.text().cursor() <= app.text().char_len());
        assert!(app.shift_field().cursor() <= app.shift_field().char_len());
        if app.shift_is_valid() {
            assert_eq!(parse_shift(app.shift_field().buffer()), Ok(app.shift()));
        }
        assert!(app.wheel_rotation().is_finite());
    }
});
