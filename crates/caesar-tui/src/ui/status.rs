//! Status bar
//!
//! Displays the active mode, shift, last status message and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::palette;
use crate::App;

const KEY_HINTS: &str = "Tab next  Enter process  Up/Down shift  Esc quit";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mode = Span::styled(
        format!(" {} ", app.mode()),
        Style::default().fg(palette::BACKGROUND).bg(palette::ACCENT).add_modifier(Modifier::BOLD),
    );

    let shift = if app.shift_is_valid() {
        Span::raw(format!(" shift {} ", app.shift()))
    } else {
        Span::styled(format!(" shift {}? ", app.shift()), Style::default().fg(palette::ERROR))
    };

    let message =
        app.status_message().map_or_else(|| Span::raw(""), |m| Span::raw(format!("| {m} ")));

    let status_line = Line::from(vec![
        mode,
        shift,
        message,
        Span::styled(format!("| {KEY_HINTS}"), Style::default().fg(palette::MUTED)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(palette::SURFACE).fg(palette::TEXT));

    frame.render_widget(paragraph, area);
}
