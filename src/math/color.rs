//! Colour conversion using the six-sector HSV model

use std::fmt;

/// Converts HSV in unit ranges to RGB in unit ranges
///
/// The hue circle is divided into six 60° sectors; `p`, `q` and `t` are the
/// falling, rising and floor channel levels inside the active sector.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s.abs() < f64::EPSILON {
        return (v, v, v);
    }

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(-(1.0 - f), 1.0);

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black, used as the canvas background
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White, used for overlay text
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Gray, used behind the shuffling label
    pub const GRAY: Self = Self::new(128, 128, 128);

    /// Create a colour from 8-bit channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize unit-range channels to 8 bits by truncation
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    /// Convert an HSV triple in unit ranges
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::from_unit(r, g, b)
    }

    /// Fixed-width `#rrggbb` form
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Opaque RGBA channels for image buffers
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn unit_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}
