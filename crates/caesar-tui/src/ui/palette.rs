//! Colour palette.

use ratatui::style::Color;

/// Page background.
pub const BACKGROUND: Color = Color::Rgb(0x34, 0x35, 0x41);

/// Primary text and the outer wheel ring.
pub const TEXT: Color = Color::Rgb(0xEC, 0xEC, 0xF1);

/// Selected mode, focused borders and the inner wheel ring.
pub const ACCENT: Color = Color::Rgb(0x10, 0xA3, 0x7F);

/// Process button and the result text.
pub const HIGHLIGHT: Color = Color::Rgb(0x19, 0xC3, 0x7D);

/// Input fields and unselected buttons.
pub const SURFACE: Color = Color::Rgb(0x40, 0x41, 0x4F);

/// Unfocused borders and hints.
pub const MUTED: Color = Color::Rgb(0x8E, 0x8E, 0xA0);

/// Invalid input.
pub const ERROR: Color = Color::LightRed;
