//! Spinner feedback for headless runs

use crate::animation::Phase;
use crate::io::configuration::SPINNER_TICK_MS;
use crate::io::error::Result;
use crate::render::{FrameView, Renderer};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Wraps a renderer and reports cycle, phase and frame count on a spinner
///
/// The spinner is hidden entirely when progress display is disabled.
pub struct ProgressRenderer<R> {
    inner: R,
    bar: ProgressBar,
    frames: u64,
    cycle: usize,
    phase: Option<Phase>,
}

impl<R: Renderer> ProgressRenderer<R> {
    /// Wrap `inner`, showing a spinner unless `visible` is false
    pub fn new(inner: R, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            inner,
            bar,
            frames: 0,
            cycle: 0,
            phase: None,
        }
    }

    /// Frames passed through so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Cycles that have started shuffling
    pub const fn cycle(&self) -> usize {
        self.cycle
    }

    /// Status line currently shown
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Clear the spinner and give back the wrapped renderer
    pub fn finish(self) -> R {
        self.bar.finish_and_clear();
        self.inner
    }
}

impl<R: Renderer> Renderer for ProgressRenderer<R> {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<()> {
        self.inner.render(frame)?;
        self.frames += 1;

        if self.phase != Some(frame.phase) {
            if frame.phase == Phase::Shuffling {
                self.cycle += 1;
            }
            self.phase = Some(frame.phase);
        }

        self.bar.set_message(format!(
            "cycle {} · {} · {} frames",
            self.cycle, frame.phase, self.frames
        ));
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.inner.redraw()
    }
}
