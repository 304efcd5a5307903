//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod form;
pub mod palette;
mod status;
mod wheel;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::App;

/// Heading shown above the form.
pub const TITLE: &str = "Caesar Cipher Learning Lab";

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const TITLE_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 12;
    const STATUS_HEIGHT: u16 = 1;

    let background = Block::default().style(Style::default().bg(palette::BACKGROUND));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [title_area, main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_title(frame, *title_area);
    render_main_area(frame, app, *main_area);
    status::render(frame, app, *status_area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette::TEXT).add_modifier(Modifier::BOLD));

    frame.render_widget(title, area);
}

/// Render the main area (form card + wheel).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const FORM_WIDTH_PERCENT: u16 = 55;
    const WHEEL_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(FORM_WIDTH_PERCENT), Constraint::Min(WHEEL_MIN_WIDTH)])
        .split(area);

    let [form_area, wheel_area] = chunks.as_ref() else {
        return;
    };

    form::render(frame, app, *form_area);
    wheel::render(frame, app, *wheel_area);
}
