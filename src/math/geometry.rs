//! Viewport geometry for bars, spiral spokes and circle wedges
//!
//! All functions are pure and work in floating-point pixel space with the
//! origin at the top-left corner and y growing downwards.

use crate::io::configuration::RADIUS_DIVISOR;
use std::f64::consts::TAU;

/// A point in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle spanning `[x0, x1) × [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x0: f64,
    /// Top edge (inclusive)
    pub y0: f64,
    /// Right edge (exclusive)
    pub x1: f64,
    /// Bottom edge (exclusive)
    pub y1: f64,
}

/// Bar for `value` at slot `index`, growing up from the bottom edge
///
/// Height is proportional to `value / count`, so the largest value fills the
/// viewport.
pub fn bar_rect(index: usize, value: u32, count: usize, width: f64, height: f64) -> Rect {
    let count = count.max(1) as f64;
    let bar_width = width / count;
    Rect {
        x0: index as f64 * bar_width,
        y0: height - f64::from(value) * height / count,
        x1: (index + 1) as f64 * bar_width,
        y1: height,
    }
}

/// Centre of the viewport
pub const fn center(width: f64, height: f64) -> Point {
    Point::new(width / 2.0, height / 2.0)
}

/// Radius of the full spiral or circle
pub fn outer_radius(width: f64, height: f64) -> f64 {
    width.min(height) / RADIUS_DIVISOR
}

/// Angle of slot `index` when `count` slots share the full turn
pub fn slot_angle(index: usize, count: usize) -> f64 {
    index as f64 * TAU / count.max(1) as f64
}

/// Point at `radius` from `origin` in direction `angle` (radians)
pub fn polar(origin: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        radius.mul_add(angle.cos(), origin.x),
        radius.mul_add(angle.sin(), origin.y),
    )
}

/// Spiral spoke for `value` at slot `index`: from the centre outwards
///
/// The spoke length is proportional to `value / count`.
pub fn spoke(index: usize, value: u32, count: usize, width: f64, height: f64) -> (Point, Point) {
    let origin = center(width, height);
    let length = outer_radius(width, height) * f64::from(value) / count.max(1) as f64;
    (origin, polar(origin, length, slot_angle(index, count)))
}

/// Circle wedge for slot `index`: centre plus the two rim points
pub fn wedge(index: usize, count: usize, width: f64, height: f64) -> [Point; 3] {
    let origin = center(width, height);
    let radius = outer_radius(width, height);
    [
        origin,
        polar(origin, radius, slot_angle(index, count)),
        polar(origin, radius, slot_angle(index + 1, count)),
    ]
}
