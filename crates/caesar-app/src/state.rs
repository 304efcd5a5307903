//! Observable application state types.
//!
//! This module defines the data structures that represent the form's current
//! view of the world: which control has focus ([`Focus`]) and the editable
//! buffers behind the text inputs ([`TextField`]).
//!
//! These structures serve as the "View Model" for the application. A renderer
//! reads them; only [`crate::App`] mutates them.

/// Control that currently receives keyboard input.
///
/// Tab order follows the layout of the form: message, shift, the two mode
/// buttons, then Process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Message input.
    #[default]
    Text,
    /// Numeric shift input.
    Shift,
    /// Encrypt mode button.
    Encrypt,
    /// Decrypt mode button.
    Decrypt,
    /// Process button.
    Process,
}

impl Focus {
    /// All controls in tab order.
    pub const ALL: [Self; 5] =
        [Self::Text, Self::Shift, Self::Encrypt, Self::Decrypt, Self::Process];

    /// Next control in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Text => Self::Shift,
            Self::Shift => Self::Encrypt,
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Process,
            Self::Process => Self::Text,
        }
    }

    /// Previous control in tab order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Text => Self::Process,
            Self::Shift => Self::Text,
            Self::Encrypt => Self::Shift,
            Self::Decrypt => Self::Encrypt,
            Self::Process => Self::Decrypt,
        }
    }
}

/// Single-line editable text buffer.
///
/// The cursor counts characters, not bytes, so multi-byte input edits
/// cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Current contents.
    buffer: String,
    /// Cursor position in characters, `0..=char_len`.
    cursor: usize,
}

impl TextField {
    /// Field holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.chars().count();
        Self { buffer, cursor }
    }

    /// Current contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        *self = Self::with_text(text);
    }

    /// Insert `c` at the cursor and advance past it.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether anything was
    /// removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
        true
    }

    /// Delete the character at the cursor. Returns whether anything was
    /// removed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.remove(at);
        true
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer.char_indices().nth(char_index).map_or(self.buffer.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        for focus in Focus::ALL {
            assert_eq!(focus.next().prev(), focus);
        }

        let mut focus = Focus::Text;
        for _ in 0..Focus::ALL.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Text);
    }

    #[test]
    fn edits_at_cursor() {
        let mut field = TextField::default();
        for c in "helo".chars() {
            field.insert(c);
        }
        field.move_left();
        field.insert('l');
        assert_eq!(field.buffer(), "hello");
        assert_eq!(field.cursor(), 4);

        field.home();
        assert!(field.delete());
        assert_eq!(field.buffer(), "ello");
        assert!(!field.backspace());

        field.end();
        assert!(field.backspace());
        assert_eq!(field.buffer(), "ell");
        assert!(!field.delete());
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let mut field = TextField::with_text("çà");
        assert_eq!(field.cursor(), 2);

        field.move_left();
        field.insert('é');
        assert_eq!(field.buffer(), "çéà");

        assert!(field.backspace());
        assert!(field.backspace());
        assert_eq!(field.buffer(), "à");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = TextField::with_text("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.home();
        field.move_left();
        assert_eq!(field.cursor(), 0);
    }
}
