//! Mathematical utilities for colour and geometry

/// HSV to RGB conversion and hexadecimal colour formatting
pub mod color;
/// Polar and raster geometry for the display methods
pub mod geometry;
