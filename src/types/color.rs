//! RGB color
//!
//! Channels are nominally in [0, 1]. Intermediate shading sums may exceed 1;
//! they are clamped only when blending or when quantizing for output.

use std::ops::{Add, AddAssign, Mul};

/// RGB color with floating point channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Color {
    /// Background color returned for rays that hit nothing
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// White
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// True if every channel is exactly zero
    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::BLACK
    }

    /// Clamp every channel to at most `max`
    #[inline]
    pub fn min(self, max: f64) -> Self {
        Color::new(self.r.min(max), self.g.min(max), self.b.min(max))
    }

    /// Clamp every channel to [0, 1]
    #[inline]
    pub fn saturate(self) -> Self {
        Color::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Quantize to 8 bits per channel
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.saturate();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, o: Color) {
        *self = *self + o;
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, s: f64) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

/// Component-wise product (surface color filtered by light color)
impl Mul<Color> for Color {
    type Output = Color;
    #[inline]
    fn mul(self, o: Color) -> Color {
        Color::new(self.r * o.r, self.g * o.g, self.b * o.b)
    }
}

impl From<glam::DVec3> for Color {
    fn from(v: glam::DVec3) -> Self {
        Color::new(v.x, v.y, v.z)
    }
}
