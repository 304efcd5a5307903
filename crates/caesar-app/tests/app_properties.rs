//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary key sequences.
//! This ensures behavioral correctness across all possible execution paths.

use std::time::Duration;

use caesar_app::{App, AppAction, AppEvent, Focus, KeyInput};
use caesar_core::{Mode, parse_shift, transform};
use proptest::prelude::*;

/// Generate random key presses, biased toward the keys that edit fields.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => prop::char::range(' ', '~').prop_map(KeyInput::Char),
        3 => prop::char::range('0', '9').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Char('-')),
        1 => any::<char>().prop_map(KeyInput::Char),
        2 => Just(KeyInput::Enter),
        2 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        3 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// Generate random app events (no Esc, so the session never ends early).
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        8 => key_strategy().prop_map(AppEvent::Key),
        2 => (1u64..50).prop_map(|ms| AppEvent::Tick { elapsed: Duration::from_millis(ms) }),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
    ]
}

proptest! {
    #[test]
    fn prop_app_invariants_hold(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut app = App::default();

        for event in events {
            let actions = app.handle(event);

            // INVARIANT: only Esc quits
            prop_assert!(!actions.contains(&AppAction::Quit));

            // INVARIANT: cursors stay inside their buffers
            prop_assert!(app.text().cursor() <= app.text().char_len());
            prop_assert!(app.shift_field().cursor() <= app.shift_field().char_len());

            // INVARIANT: a valid shift field agrees with the shift in use
            if app.shift_is_valid() {
                prop_assert_eq!(parse_shift(app.shift_field().buffer()), Ok(app.shift()));
            }

            // INVARIANT: exactly one mode is selected
            prop_assert!(matches!(app.mode(), Mode::Encrypt | Mode::Decrypt));
        }
    }

    #[test]
    fn prop_process_matches_transform(
        events in prop::collection::vec(event_strategy(), 0..100),
    ) {
        let mut app = App::default();
        for event in events {
            app.handle(event);
        }

        app.set_focus(Focus::Process);
        app.handle(AppEvent::Key(KeyInput::Enter));

        if app.shift_is_valid() {
            let expected = transform(app.text().buffer(), app.shift(), app.mode());
            prop_assert_eq!(app.result(), Some(&expected));
        }
    }

    #[test]
    fn prop_result_length_matches_uppercased_text(text in "\\PC{0,80}", shift in any::<i64>()) {
        let mut app = App::default();
        app.set_text(text.clone());
        app.set_shift(shift);
        app.process();

        let len = app.result().map(|r| r.as_str().chars().count());
        prop_assert_eq!(len, Some(text.to_uppercase().chars().count()));
    }
}
