//! Cipher form
//!
//! Message and shift inputs, the mode and process buttons, and the result.

use caesar_app::{App, Focus, TextField};
use caesar_core::Mode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::palette;

const BORDER_SIZE: u16 = 2;
const INPUT_HEIGHT: u16 = 3;
const BUTTONS_HEIGHT: u16 = 3;
const RESULT_MIN_HEIGHT: u16 = 3;
const BUTTON_GAP: &str = "  ";

/// Render the form card.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(BUTTONS_HEIGHT),
            Constraint::Min(RESULT_MIN_HEIGHT),
        ])
        .split(area);

    let [message_area, shift_area, buttons_area, result_area] = chunks.as_ref() else {
        return;
    };

    render_input(frame, " Message ", app.text(), app.focus() == Focus::Text, true, *message_area);

    let shift_title =
        if app.shift_is_valid() { " Shift (0-25) " } else { " Shift (not an integer) " };
    render_input(
        frame,
        shift_title,
        app.shift_field(),
        app.focus() == Focus::Shift,
        app.shift_is_valid(),
        *shift_area,
    );

    render_buttons(frame, app, *buttons_area);
    render_result(frame, app, *result_area);
}

fn border_style(focused: bool, valid: bool) -> Style {
    let color = match (valid, focused) {
        (false, _) => palette::ERROR,
        (true, true) => palette::ACCENT,
        (true, false) => palette::MUTED,
    };
    Style::default().fg(color)
}

/// Render a single-line input with its cursor.
fn render_input(
    frame: &mut Frame,
    title: &str,
    field: &TextField,
    focused: bool,
    valid: bool,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(focused, valid));

    // Scroll so the cursor cell stays inside the box
    let inner_width = area.width.saturating_sub(BORDER_SIZE) as usize;
    let skip = field.cursor().saturating_sub(inner_width.saturating_sub(1));
    let visible: String = field.buffer().chars().skip(skip).collect();

    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(palette::TEXT).bg(palette::SURFACE))
        .block(block);

    frame.render_widget(paragraph, area);

    if focused {
        let cursor_offset = (field.cursor() - skip) as u16;
        let cursor_x = area.x.saturating_add(1).saturating_add(cursor_offset);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let selected = Style::default().fg(palette::BACKGROUND).bg(palette::ACCENT);
    let unselected = Style::default().fg(palette::TEXT).bg(palette::SURFACE);
    let mode_style = |mode: Mode| if app.mode() == mode { selected } else { unselected };

    let line = Line::from(vec![
        button("Encrypt", mode_style(Mode::Encrypt), app.focus() == Focus::Encrypt),
        Span::raw(BUTTON_GAP),
        button("Decrypt", mode_style(Mode::Decrypt), app.focus() == Focus::Decrypt),
        Span::raw(BUTTON_GAP),
        button(
            "Process",
            Style::default().fg(palette::BACKGROUND).bg(palette::HIGHLIGHT),
            app.focus() == Focus::Process,
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Mode ")
        .border_style(Style::default().fg(palette::MUTED));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn button(label: &'static str, style: Style, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!(">[ {label} ]<"), style.add_modifier(Modifier::BOLD))
    } else {
        Span::styled(format!(" [ {label} ] "), style)
    }
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(Style::default().fg(palette::MUTED));

    let body = match app.result() {
        Some(result) => Line::styled(
            result.as_str(),
            Style::default().fg(palette::HIGHLIGHT).add_modifier(Modifier::BOLD),
        ),
        None => {
            Line::styled("Press Process to see the result", Style::default().fg(palette::MUTED))
        }
    };

    let paragraph = Paragraph::new(body).wrap(Wrap { trim: false }).block(block);

    frame.render_widget(paragraph, area);
}
