//! Rendering tests against ratatui's in-memory backend.

use caesar_app::{App, AppConfig, AppEvent, Focus, KeyInput};
use caesar_core::Mode;
use caesar_tui::ui::{self, TITLE, palette};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn draw(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

/// Cell position of the first occurrence of `needle`.
fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let len = needle.chars().count() as u16;
    (0..buffer.area.height).find_map(|y| {
        (0..buffer.area.width.saturating_sub(len)).find_map(|x| {
            let window: String = (x..x + len).map(|cx| buffer[(cx, y)].symbol()).collect();
            (window == needle).then_some((x, y))
        })
    })
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height).map(|y| row_text(buffer, y)).collect::<Vec<_>>().join("\n")
}

/// Wheel letters drawn in `color`, right of the form card.
fn wheel_letters(buffer: &Buffer, color: ratatui::style::Color) -> usize {
    let form_width = WIDTH * 55 / 100;
    buffer
        .content
        .iter()
        .enumerate()
        .filter(|(i, cell)| {
            let x = (*i as u16) % buffer.area.width;
            x > form_width
                && cell.fg == color
                && cell.symbol().chars().all(|c| c.is_ascii_uppercase())
                && !cell.symbol().is_empty()
        })
        .count()
}

#[test]
fn first_frame_shows_title_and_empty_result() {
    let buffer = draw(&App::default());
    let screen = screen_text(&buffer);

    assert!(row_text(&buffer, 0).contains(TITLE));
    assert!(screen.contains("Message"));
    assert!(screen.contains("Shift (0-25)"));
    assert!(screen.contains("Press Process to see the result"));
    assert!(screen.contains("A -> D"));
}

#[test]
fn processed_result_is_shown() {
    let mut app = App::new(AppConfig { text: "Hello, World!".into(), ..AppConfig::default() });
    app.process();

    let screen = screen_text(&draw(&app));

    assert!(screen.contains("Hello, World!"));
    assert!(screen.contains("KHOOR, ZRUOG!"));
    assert!(screen.contains("Encrypted with shift 3"));
}

#[test]
fn selected_mode_is_highlighted() {
    let mut app = App::default();
    app.select_mode(Mode::Decrypt);

    let buffer = draw(&app);
    let screen = screen_text(&buffer);

    let decrypt = find(&buffer, "[ Decrypt ]").unwrap();
    assert_eq!(buffer[decrypt].bg, palette::ACCENT);

    let encrypt = find(&buffer, "[ Encrypt ]").unwrap();
    assert_eq!(buffer[encrypt].bg, palette::SURFACE);

    assert!(screen.contains(" Decrypt "));
}

#[test]
fn focused_button_is_marked() {
    let mut app = App::default();
    app.set_focus(Focus::Process);

    let screen = screen_text(&draw(&app));

    assert!(screen.contains(">[ Process ]<"));
    assert!(!screen.contains(">[ Encrypt ]<"));
}

#[test]
fn invalid_shift_is_flagged() {
    let mut app = App::default();
    app.set_focus(Focus::Shift);
    app.handle(AppEvent::Key(KeyInput::Home));
    app.handle(AppEvent::Key(KeyInput::Char('-')));
    app.handle(AppEvent::Key(KeyInput::End));
    app.handle(AppEvent::Key(KeyInput::Backspace));
    assert_eq!(app.shift_field().buffer(), "-");
    assert!(!app.shift_is_valid());

    let screen = screen_text(&draw(&app));

    assert!(screen.contains("Shift (not an integer)"));
    // Last valid shift was -3
    assert!(screen.contains("shift -3?"));
}

#[test]
fn wheel_draws_both_rings() {
    let buffer = draw(&App::default());

    // Neighbouring letters can share a cell on small canvases; most must show
    assert!(wheel_letters(&buffer, palette::TEXT) >= 20);
    assert!(wheel_letters(&buffer, palette::ACCENT) >= 20);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::default();
    app.set_text("a long message that will not fit anywhere");
    app.process();

    for (width, height) in [(1, 1), (10, 3), (20, 8), (40, 12)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    }
}
