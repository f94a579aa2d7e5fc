//! Renderers that draw the array state after every step

use crate::animation::Phase;
use crate::io::error::Result;
use crate::io::settings::SessionConfig;
use crate::model::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration overlay and shuffling label text
pub mod overlay;
/// Pure rasterization of frames into RGBA images
pub mod raster;
/// Interactive crossterm renderer and input-aware pacer
pub mod terminal;

/// How the array is laid out on the drawing surface
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum DisplayMethod {
    /// Vertical bars along the bottom edge
    #[default]
    Bars,
    /// Spokes from the centre, length proportional to value
    Spiral,
    /// Full-radius wedges around the centre
    Circle,
}

impl DisplayMethod {
    /// Human-readable name, matching the persisted settings value
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bars => "Bars",
            Self::Spiral => "Spiral",
            Self::Circle => "Circle",
        }
    }
}

impl fmt::Display for DisplayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a renderer needs for one full redraw
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Array values in position order
    pub values: &'a [u32],
    /// Session palette, indexed by `value - 1`
    pub palette: &'a Palette,
    /// Session parameters, including display method and overlay flag
    pub config: &'a SessionConfig,
    /// Loop phase that produced the frame
    pub phase: Phase,
    /// How long the frame stays up before the next mutation
    pub hold: Duration,
}

/// Draws frames; called once per step event with a complete state
///
/// Renderers only read the frame and must not assume incremental diffs.
pub trait Renderer {
    /// Redraw from scratch
    ///
    /// # Errors
    ///
    /// Returns an error if the drawing surface cannot be written
    fn render(&mut self, frame: &FrameView<'_>) -> Result<()>;

    /// Draw the last rendered frame again, e.g. after the surface was resized
    ///
    /// Renderers that keep nothing on screen ignore this.
    ///
    /// # Errors
    ///
    /// Returns an error if the drawing surface cannot be written
    fn redraw(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Renderer that draws nothing, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) -> Result<()> {
        Ok(())
    }
}
