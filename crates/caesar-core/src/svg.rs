//! Standalone SVG rendering of the cipher wheel.

use std::fmt;

use crate::wheel::{WheelGeometry, WheelLetter};

const BACKGROUND: &str = "#343541";
const OUTER_FILL: &str = "#ECECF1";
const INNER_FILL: &str = "#10A37F";
const OUTER_FONT_SIZE: u32 = 16;
const INNER_FONT_SIZE: u32 = 14;

/// SVG document for a wheel at a given rotation. Rendered via [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct WheelSvg {
    geometry: WheelGeometry,
    rotation_degrees: f64,
}

impl WheelSvg {
    /// Wheel with its inner ring turned `rotation_degrees` clockwise.
    pub fn new(geometry: WheelGeometry, rotation_degrees: f64) -> Self {
        Self { geometry, rotation_degrees }
    }
}

impl fmt::Display for WheelSvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.geometry.size;
        let (cx, cy) = self.geometry.center();

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(f, r#"  <rect width="{size}" height="{size}" fill="{BACKGROUND}"/>"#)?;

        writeln!(
            f,
            r#"  <g font-family="monospace" font-size="{OUTER_FONT_SIZE}" fill="{OUTER_FILL}" text-anchor="middle" dominant-baseline="middle">"#
        )?;
        write_letters(f, &self.geometry.outer_positions())?;
        writeln!(f, "  </g>")?;

        writeln!(
            f,
            r#"  <g transform="rotate({:.2} {cx} {cy})" font-family="monospace" font-size="{INNER_FONT_SIZE}" fill="{INNER_FILL}" text-anchor="middle" dominant-baseline="middle">"#,
            self.rotation_degrees
        )?;
        write_letters(f, &self.geometry.inner_positions(0.0))?;
        writeln!(f, "  </g>")?;

        writeln!(f, "</svg>")
    }
}

fn write_letters(f: &mut fmt::Formatter<'_>, letters: &[WheelLetter]) -> fmt::Result {
    for letter in letters {
        writeln!(
            f,
            r#"    <text x="{:.2}" y="{:.2}">{}</text>"#,
            letter.x, letter.y, letter.letter
        )?;
    }
    Ok(())
}

/// Render the wheel as an SVG document.
pub fn render_wheel_svg(geometry: WheelGeometry, rotation_degrees: f64) -> String {
    WheelSvg::new(geometry, rotation_degrees).to_string()
}
