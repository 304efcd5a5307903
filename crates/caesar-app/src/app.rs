//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns every field of
//! the cipher form completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Edits the message and shift inputs and tracks keyboard focus.
//! - Keeps exactly one [`Mode`] selected.
//! - Runs the cipher on Process and keeps only the latest result.
//! - Animates the wheel toward the rotation of the current shift.

use std::time::Duration;

use caesar_core::{
    CipherRequest, CipherResult, Mode, Spring, SpringConfig, parse_shift, rotation_degrees,
};

use crate::{AppAction, AppConfig, AppEvent, Focus, KeyInput, TextField};

/// Range the shift spinner steps within.
pub const SHIFT_STEP_RANGE: (i64, i64) = (0, 25);

/// Shifts beyond this magnitude are shown on the wheel reduced modulo 26.
const MAX_WHEEL_SHIFT: i64 = 260;

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in isolation.
#[derive(Debug, Clone)]
pub struct App {
    /// Message input.
    text: TextField,
    /// Shift input, as typed.
    shift_field: TextField,
    /// Last shift that parsed successfully.
    shift: i64,
    /// Whether `shift_field` currently parses.
    shift_valid: bool,
    /// Selected mode.
    mode: Mode,
    /// Most recent Process output. `None` until the first Process.
    result: Option<CipherResult>,
    /// Control receiving keyboard input.
    focus: Focus,
    /// Wheel rotation in degrees.
    wheel: Spring,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl App {
    /// Create a new App from the initial form values.
    pub fn new(config: AppConfig) -> Self {
        let wheel = Spring::new(SpringConfig::default(), wheel_rotation_for(config.shift));
        Self {
            text: TextField::with_text(config.text),
            shift_field: TextField::with_text(config.shift.to_string()),
            shift: config.shift,
            shift_valid: true,
            mode: config.mode,
            result: None,
            focus: Focus::Text,
            wheel,
            status_message: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick { elapsed } => self.handle_tick(elapsed),
            AppEvent::Resize(..) => vec![AppAction::Render],
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => return self.quit(),
            KeyInput::Tab => {
                self.focus = self.focus.next();
                return vec![AppAction::Render];
            },
            KeyInput::BackTab => {
                self.focus = self.focus.prev();
                return vec![AppAction::Render];
            },
            _ => {},
        }

        match self.focus {
            Focus::Text => self.handle_text_key(key),
            Focus::Shift => self.handle_shift_key(key),
            Focus::Encrypt => self.handle_mode_key(key, Mode::Encrypt),
            Focus::Decrypt => self.handle_mode_key(key, Mode::Decrypt),
            Focus::Process => match key {
                KeyInput::Enter | KeyInput::Char(' ') => self.process(),
                _ => vec![],
            },
        }
    }

    fn handle_text_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => return self.process(),
            KeyInput::Char(c) => self.text.insert(c),
            KeyInput::Backspace => {
                self.text.backspace();
            },
            KeyInput::Delete => {
                self.text.delete();
            },
            KeyInput::Left => self.text.move_left(),
            KeyInput::Right => self.text.move_right(),
            KeyInput::Home => self.text.home(),
            KeyInput::End => self.text.end(),
            KeyInput::Up | KeyInput::Down | KeyInput::Tab | KeyInput::BackTab | KeyInput::Esc => {
                return vec![];
            },
        }
        vec![AppAction::Render]
    }

    fn handle_shift_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let edited = match key {
            KeyInput::Enter => return self.process(),
            KeyInput::Up => return self.step_shift(1),
            KeyInput::Down => return self.step_shift(-1),
            KeyInput::Char(c) if self.accepts_shift_char(c) => {
                self.shift_field.insert(c);
                true
            },
            KeyInput::Char(_) => return vec![],
            KeyInput::Backspace => self.shift_field.backspace(),
            KeyInput::Delete => self.shift_field.delete(),
            KeyInput::Left => {
                self.shift_field.move_left();
                false
            },
            KeyInput::Right => {
                self.shift_field.move_right();
                false
            },
            KeyInput::Home => {
                self.shift_field.home();
                false
            },
            KeyInput::End => {
                self.shift_field.end();
                false
            },
            KeyInput::Tab | KeyInput::BackTab | KeyInput::Esc => return vec![],
        };

        if edited {
            self.reparse_shift();
        }
        vec![AppAction::Render]
    }

    fn handle_mode_key(&mut self, key: KeyInput, button: Mode) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Char(' ') => self.select_mode(button),
            KeyInput::Left | KeyInput::Right => {
                let other = button.toggled();
                self.focus = focus_for(other);
                self.select_mode(other)
            },
            _ => vec![],
        }
    }

    fn handle_tick(&mut self, elapsed: Duration) -> Vec<AppAction> {
        if self.wheel.is_at_rest() {
            return vec![];
        }
        self.wheel.step(elapsed);
        vec![AppAction::Render]
    }

    /// Digits anywhere, a minus sign only at the very start and only once.
    fn accepts_shift_char(&self, c: char) -> bool {
        let has_sign = self.shift_field.buffer().starts_with('-');
        let at_start = self.shift_field.cursor() == 0;
        if c.is_ascii_digit() {
            return !(at_start && has_sign);
        }
        c == '-' && at_start && !has_sign
    }

    fn reparse_shift(&mut self) {
        match parse_shift(self.shift_field.buffer()) {
            Ok(shift) => {
                self.shift_valid = true;
                self.apply_shift(shift);
            },
            Err(e) => {
                tracing::debug!(error = %e, "shift field does not parse");
                self.shift_valid = false;
            },
        }
    }

    fn apply_shift(&mut self, shift: i64) {
        self.shift = shift;
        self.wheel.set_target(wheel_rotation_for(shift));
    }

    fn step_shift(&mut self, delta: i64) -> Vec<AppAction> {
        let (min, max) = SHIFT_STEP_RANGE;
        let shift = self.shift.saturating_add(delta).clamp(min, max);
        self.set_shift(shift)
    }

    /// Set the message text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        self.text.set(text);
        vec![AppAction::Render]
    }

    /// Set the shift, overwriting whatever is typed in the shift field.
    pub fn set_shift(&mut self, shift: i64) -> Vec<AppAction> {
        self.shift_field.set(shift.to_string());
        self.shift_valid = true;
        self.apply_shift(shift);
        vec![AppAction::Render]
    }

    /// Select a mode. Either mode can be selected from either mode.
    pub fn select_mode(&mut self, mode: Mode) -> Vec<AppAction> {
        if self.mode != mode {
            tracing::debug!(%mode, "mode selected");
        }
        self.mode = mode;
        vec![AppAction::Render]
    }

    /// Run the cipher over the current fields and store the result.
    ///
    /// Leaves the previous result in place if the shift field does not parse.
    pub fn process(&mut self) -> Vec<AppAction> {
        if !self.shift_valid {
            let input = self.shift_field.buffer();
            tracing::warn!(input, "process with invalid shift");
            self.status_message = Some(format!("Error: shift {input:?} is not an integer"));
            return vec![AppAction::Render];
        }

        let request = CipherRequest::new(self.text.buffer(), self.shift, self.mode);
        let result = request.process();
        tracing::debug!(
            mode = %request.mode,
            shift = request.shift,
            chars = result.as_str().chars().count(),
            "processed"
        );

        self.status_message = Some(match request.mode {
            Mode::Encrypt => format!("Encrypted with shift {}", request.shift),
            Mode::Decrypt => format!("Decrypted with shift {}", request.shift),
        });
        self.result = Some(result);
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Move keyboard focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Message input.
    pub fn text(&self) -> &TextField {
        &self.text
    }

    /// Shift input, as typed.
    pub fn shift_field(&self) -> &TextField {
        &self.shift_field
    }

    /// Shift used by the next Process. The last value that parsed.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Whether the shift field currently holds an integer.
    pub fn shift_is_valid(&self) -> bool {
        self.shift_valid
    }

    /// Selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Most recent result. `None` before the first Process.
    pub fn result(&self) -> Option<&CipherResult> {
        self.result.as_ref()
    }

    /// Control receiving keyboard input.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current wheel rotation in degrees.
    pub fn wheel_rotation(&self) -> f64 {
        self.wheel.position()
    }

    /// Rotation the wheel is moving toward.
    pub fn wheel_target(&self) -> f64 {
        self.wheel.target()
    }

    /// Whether the wheel is still moving.
    pub fn is_animating(&self) -> bool {
        !self.wheel.is_at_rest()
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

fn focus_for(mode: Mode) -> Focus {
    match mode {
        Mode::Encrypt => Focus::Encrypt,
        Mode::Decrypt => Focus::Decrypt,
    }
}

/// Wheel rotation for `shift`. Huge shifts are reduced so the spring never
/// has to cover more than a few turns.
fn wheel_rotation_for(shift: i64) -> f64 {
    let shown = if shift.unsigned_abs() <= MAX_WHEEL_SHIFT.unsigned_abs() {
        shift
    } else {
        shift.rem_euclid(26)
    };
    rotation_degrees(shown as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
    }

    #[test]
    fn starts_with_defaults() {
        let app = App::default();

        assert_eq!(app.shift(), 3);
        assert_eq!(app.shift_field().buffer(), "3");
        assert_eq!(app.mode(), Mode::Encrypt);
        assert_eq!(app.focus(), Focus::Text);
        assert!(app.result().is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn enter_in_text_field_processes() {
        let mut app = App::default();
        type_text(&mut app, "Hello, World!");

        let actions = app.handle(AppEvent::Key(KeyInput::Enter));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.result().map(CipherResult::as_str), Some("KHOOR, ZRUOG!"));
        assert_eq!(app.status_message(), Some("Encrypted with shift 3"));
    }

    #[test]
    fn shift_field_rejects_letters() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);

        let actions = app.handle(AppEvent::Key(KeyInput::Char('x')));

        assert!(actions.is_empty());
        assert_eq!(app.shift_field().buffer(), "3");
    }

    #[test]
    fn sign_only_at_start() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);

        app.handle(AppEvent::Key(KeyInput::Char('-')));
        assert_eq!(app.shift_field().buffer(), "3");

        app.handle(AppEvent::Key(KeyInput::Home));
        app.handle(AppEvent::Key(KeyInput::Char('-')));
        app.handle(AppEvent::Key(KeyInput::Home));
        app.handle(AppEvent::Key(KeyInput::Char('-')));
        assert_eq!(app.shift_field().buffer(), "-3");
        assert_eq!(app.shift(), -3);
    }

    #[test]
    fn plus_sign_is_rejected() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);

        app.handle(AppEvent::Key(KeyInput::Home));
        let actions = app.handle(AppEvent::Key(KeyInput::Char('+')));

        assert!(actions.is_empty());
        assert_eq!(app.shift_field().buffer(), "3");
        assert_eq!(app.shift(), 3);
        assert!(app.shift_is_valid());
    }

    #[test]
    fn lone_sign_keeps_last_valid_shift() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);

        app.handle(AppEvent::Key(KeyInput::Backspace));
        assert_eq!(app.shift(), 0, "empty field reads as zero");
        assert!(app.shift_is_valid());

        app.handle(AppEvent::Key(KeyInput::Char('-')));
        assert!(!app.shift_is_valid());
        assert_eq!(app.shift(), 0);
    }

    #[test]
    fn typing_shift_retargets_wheel() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);

        app.handle(AppEvent::Key(KeyInput::Char('0')));

        assert_eq!(app.shift(), 30);
        assert!(app.is_animating());
        assert!((app.wheel_target() - rotation_degrees(30.0)).abs() < 1e-9);
    }

    #[test]
    fn huge_shift_is_reduced_on_the_wheel() {
        let mut app = App::default();
        app.set_shift(1_000_000);

        // 1_000_000 mod 26 = 14
        assert!((app.wheel_target() - rotation_degrees(14.0)).abs() < 1e-9);
        assert_eq!(app.shift(), 1_000_000);
    }

    #[test]
    fn spinner_clamps_to_suggested_range() {
        let mut app = App::default();
        app.set_focus(Focus::Shift);
        app.set_shift(25);

        app.handle(AppEvent::Key(KeyInput::Up));
        assert_eq!(app.shift(), 25);

        app.set_shift(0);
        app.handle(AppEvent::Key(KeyInput::Down));
        assert_eq!(app.shift(), 0);

        app.set_shift(40);
        app.handle(AppEvent::Key(KeyInput::Down));
        assert_eq!(app.shift(), 25);
        assert_eq!(app.shift_field().buffer(), "25");
    }

    #[test]
    fn mode_buttons_are_exclusive() {
        let mut app = App::default();
        app.set_focus(Focus::Decrypt);

        app.handle(AppEvent::Key(KeyInput::Enter));
        assert_eq!(app.mode(), Mode::Decrypt);

        app.handle(AppEvent::Key(KeyInput::Left));
        assert_eq!(app.mode(), Mode::Encrypt);
        assert_eq!(app.focus(), Focus::Encrypt);

        app.handle(AppEvent::Key(KeyInput::Char(' ')));
        assert_eq!(app.mode(), Mode::Encrypt);
    }

    #[test]
    fn tick_only_renders_while_moving() {
        let mut app = App::default();
        assert!(app.handle(AppEvent::Tick { elapsed: Duration::from_millis(16) }).is_empty());

        app.set_shift(10);
        assert_eq!(app.handle(AppEvent::Tick { elapsed: Duration::from_millis(16) }), vec![
            AppAction::Render
        ]);
    }

    #[test]
    fn api_quit() {
        let app = App::default();
        assert_eq!(app.quit(), vec![AppAction::Quit]);
    }

    #[test]
    fn esc_quits_from_any_focus() {
        for focus in Focus::ALL {
            let mut app = App::default();
            app.set_focus(focus);
            assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);
        }
    }
}
