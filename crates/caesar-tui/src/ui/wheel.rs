//! Cipher wheel
//!
//! Draws both letter rings on a braille canvas. The inner ring follows the
//! spring's current rotation, so it turns while the animation runs.

use caesar_app::App;
use caesar_core::{Mode, WheelGeometry, shift_char};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle},
    },
};

use super::palette;

/// Terminal cells are about twice as tall as they are wide.
const CELL_ASPECT: u16 = 2;

/// Gap between a ring of letters and the guide circle around it.
const RING_PADDING: f64 = 14.0;

/// Render the wheel panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mapped = shift_char('A', app.shift(), Mode::Encrypt);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Wheel  A -> {mapped} "))
        .border_style(Style::default().fg(palette::MUTED));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let geometry = WheelGeometry::default();
    let size = geometry.size;
    let (cx, cy) = geometry.center();
    let outer_letters = geometry.outer_positions();
    let inner_letters = geometry.inner_positions(app.wheel_rotation());
    let outer_guide = geometry.radius + RING_PADDING;
    let inner_guide = geometry.inner_radius() + RING_PADDING;

    // Canvas y grows upward, wheel coordinates grow downward
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette::BACKGROUND)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            ctx.draw(&Circle { x: cx, y: size - cy, radius: outer_guide, color: palette::SURFACE });
            ctx.draw(&Circle { x: cx, y: size - cy, radius: inner_guide, color: palette::SURFACE });
            ctx.layer();

            for letter in &outer_letters {
                let text =
                    Span::styled(letter.letter.to_string(), Style::default().fg(palette::TEXT));
                ctx.print(letter.x, size - letter.y, text);
            }
            for letter in &inner_letters {
                let text =
                    Span::styled(letter.letter.to_string(), Style::default().fg(palette::ACCENT));
                ctx.print(letter.x, size - letter.y, text);
            }
        });

    frame.render_widget(canvas, square(inner));
}

/// Largest visually square rect centred in `area`.
fn square(area: Rect) -> Rect {
    let height = area.height.min(area.width / CELL_ASPECT);
    let width = height * CELL_ASPECT;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_centred_in_wide_area() {
        let rect = square(Rect::new(0, 0, 100, 20));
        assert_eq!(rect, Rect::new(30, 0, 40, 20));
    }

    #[test]
    fn square_is_centred_in_tall_area() {
        let rect = square(Rect::new(10, 5, 20, 30));
        assert_eq!(rect, Rect::new(10, 15, 20, 10));
    }

    #[test]
    fn square_of_empty_area_is_empty() {
        let rect = square(Rect::new(3, 4, 0, 0));
        assert_eq!(rect.area(), 0);
    }
}
