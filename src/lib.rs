//! Sorting algorithm visualizer that animates comparison sorts step by step
//!
//! A session shuffles an array of `1..=N`, sorts it with an instrumented
//! engine that reports every mutation, pauses, and starts over. Each step is
//! drawn as bars, spokes or wedges coloured by value along a rainbow.

#![forbid(unsafe_code)]

/// Instrumented sort engines and the step observer they report to
pub mod algorithm;
/// Phase sequencing, pacing and cancellation for the animation loop
pub mod animation;
/// Settings, command-line handling, recording and error types
pub mod io;
/// Colour conversion and drawing geometry
pub mod math;
/// The array being sorted and its colour palette
pub mod model;
/// Renderers for terminal output and raster frames
pub mod render;

pub use io::error::{Result, VisualizerError};
