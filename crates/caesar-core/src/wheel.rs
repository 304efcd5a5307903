//! Cipher wheel geometry.
//!
//! Two concentric rings of the alphabet. The outer ring is fixed; the inner
//! ring turns by one letter slot per unit of shift, so at rest each inner
//! (plaintext) letter sits against its encrypted counterpart on the outer
//! ring.
//!
//! Coordinates follow SVG conventions: origin top-left, `y` grows downward,
//! positive angles turn clockwise. Letter `A` sits at twelve o'clock.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::alphabet::{ALPHABET, ALPHABET_LEN};

/// Degrees the inner ring turns per unit of shift.
pub const DEGREES_PER_SHIFT: f64 = 360.0 / 26.0;

/// Dimensions of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Width and height of the square drawing area.
    pub size: f64,
    /// Radius of the outer ring's letter centres.
    pub radius: f64,
    /// How far inside the outer ring the inner ring's letters sit.
    pub inner_inset: f64,
    /// Scale applied to the inner ring about the wheel centre.
    pub inner_scale: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self { size: 300.0, radius: 120.0, inner_inset: 30.0, inner_scale: 260.0 / 300.0 }
    }
}

/// A letter placed on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLetter {
    /// The letter drawn.
    pub letter: char,
    /// Horizontal centre.
    pub x: f64,
    /// Vertical centre (downward).
    pub y: f64,
}

impl WheelGeometry {
    /// Centre of the wheel.
    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    /// Effective radius of the inner ring after scaling.
    pub fn inner_radius(&self) -> f64 {
        (self.radius - self.inner_inset) * self.inner_scale
    }

    /// Letters of the fixed outer ring.
    pub fn outer_positions(&self) -> [WheelLetter; ALPHABET_LEN as usize] {
        self.ring(self.radius, 0.0)
    }

    /// Letters of the inner ring turned by `rotation_degrees` clockwise.
    pub fn inner_positions(&self, rotation_degrees: f64) -> [WheelLetter; ALPHABET_LEN as usize] {
        self.ring(self.inner_radius(), rotation_degrees.to_radians())
    }

    fn ring(&self, radius: f64, rotation: f64) -> [WheelLetter; ALPHABET_LEN as usize] {
        let (cx, cy) = self.center();
        std::array::from_fn(|i| {
            let angle = slot_angle(i) + rotation;
            WheelLetter {
                letter: ALPHABET[i],
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
            }
        })
    }
}

/// Rotation of the inner ring for `shift`, in degrees.
///
/// Not reduced modulo a full turn: a shift of 30 turns the wheel further
/// than a shift of 4, even though both encrypt identically.
pub fn rotation_degrees(shift: f64) -> f64 {
    shift * DEGREES_PER_SHIFT
}

fn slot_angle(index: usize) -> f64 {
    index as f64 * TAU / f64::from(ALPHABET_LEN) - FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn bearing(letter: &WheelLetter, geometry: &WheelGeometry) -> f64 {
        let (cx, cy) = geometry.center();
        (letter.y - cy).atan2(letter.x - cx)
    }

    #[test]
    fn letter_a_is_at_twelve_o_clock() {
        let geometry = WheelGeometry::default();
        let outer = geometry.outer_positions();

        assert_eq!(outer[0].letter, 'A');
        assert!((outer[0].x - 150.0).abs() < EPS);
        assert!((outer[0].y - 30.0).abs() < EPS);
    }

    #[test]
    fn letters_go_clockwise() {
        let geometry = WheelGeometry::default();
        let outer = geometry.outer_positions();

        // 'G' is just under a quarter turn clockwise: right of centre
        assert_eq!(outer[6].letter, 'G');
        assert!(outer[6].x > 260.0);
        // 'N' is exactly half a turn away: bottom
        assert!((outer[13].x - 150.0).abs() < EPS);
        assert!((outer[13].y - 270.0).abs() < EPS);
    }

    #[test]
    fn full_shift_is_full_turn() {
        assert!((rotation_degrees(26.0) - 360.0).abs() < EPS);
        assert!((rotation_degrees(3.0) - 3.0 * 360.0 / 26.0).abs() < EPS);
        assert!(rotation_degrees(30.0) > 360.0);
    }

    #[test]
    fn rotated_inner_letter_faces_its_ciphertext() {
        let geometry = WheelGeometry::default();
        let outer = geometry.outer_positions();

        for shift in 0..26usize {
            let inner = geometry.inner_positions(rotation_degrees(shift as f64));
            for (i, letter) in inner.iter().enumerate() {
                let target = &outer[(i + shift) % 26];
                let delta =
                    (bearing(letter, &geometry) - bearing(target, &geometry)).rem_euclid(TAU);
                assert!(
                    delta < 1e-6 || TAU - delta < 1e-6,
                    "shift {shift}: {} should face {}",
                    letter.letter,
                    target.letter
                );
            }
        }
    }

    #[test]
    fn inner_ring_is_scaled() {
        let geometry = WheelGeometry::default();
        assert!((geometry.inner_radius() - 78.0).abs() < EPS);

        let inner = geometry.inner_positions(0.0);
        assert!((inner[0].y - (150.0 - 78.0)).abs() < EPS);
    }
}
