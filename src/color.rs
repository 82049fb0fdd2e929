//! RGB color values
//!
//! Channels are kept as `i32` so additive composition can run past 255
//! without saturating; clamping only happens when a color is displayed.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Maximum displayable channel value
pub const CHANNEL_MAX: i32 = 255;

/// An RGB triple with unclamped integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from raw channel values
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// `255 - channel` on every channel. Applying it twice is the identity.
    pub fn inverted(self) -> Self {
        Self::new(CHANNEL_MAX - self.r, CHANNEL_MAX - self.g, CHANNEL_MAX - self.b)
    }

    /// Sum of the three channels
    pub fn brightness(self) -> i32 {
        self.r + self.g + self.b
    }

    /// Apply `f` to every channel
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Clamp each channel into `0..=255` for display
    pub fn clamped(self) -> [u8; 3] {
        let c = |v: i32| v.clamp(0, CHANNEL_MAX) as u8;
        [c(self.r), c(self.g), c(self.b)]
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl From<(i32, i32, i32)> for Rgb {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for (i32, i32, i32) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Convert HSV to RGB
///
/// # Arguments
/// * `h` - Hue in degrees, wrapped into `0..360`
/// * `s` - Saturation in `0..=1`
/// * `v` - Value in `0..=1`
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_channel = |f: f32| ((f + m) * CHANNEL_MAX as f32).round() as i32;
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_is_self_inverse() {
        let c = Rgb::new(12, 200, 255);
        assert_eq!(c.inverted(), Rgb::new(243, 55, 0));
        assert_eq!(c.inverted().inverted(), c);
    }

    #[test]
    fn test_add_does_not_clamp() {
        let sum = Rgb::new(200, 0, 10) + Rgb::new(100, 0, -20);
        assert_eq!(sum, Rgb::new(300, 0, -10));
        assert_eq!(sum.clamped(), [255, 0, 0]);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_tuple_conversion() {
        let c: Rgb = (1, 2, 3).into();
        let t: (i32, i32, i32) = c.into();
        assert_eq!(t, (1, 2, 3));
        assert_eq!(c.to_string(), "(1, 2, 3)");
    }
}
