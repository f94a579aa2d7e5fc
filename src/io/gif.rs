//! Frame capture and GIF generation for recorded sessions

use crate::animation::Phase;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, VisualizerError, WithContext};
use crate::io::settings::SessionConfig;
use crate::model::Palette;
use crate::render::raster::rasterize;
use crate::render::{FrameView, Renderer};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

/// Array state captured at one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Values in position order
    pub values: Vec<u32>,
    /// Loop phase that produced the frame
    pub phase: Phase,
    /// How long the frame stays up, summed over coalesced renders
    pub hold: Duration,
}

/// Records rendered frames for later GIF export
///
/// Frames held shorter than viewers can display are coalesced as they arrive:
/// the newest state of a run of short frames replaces the older ones and the
/// run's hold accumulates, so the apparent animation speed is kept. Only
/// frames that will be exported are retained, and rasterization happens at
/// export time.
pub struct GifRecorder {
    frames: Vec<FrameSnapshot>,
    pending: Option<FrameSnapshot>,
    min_delay: Duration,
    captured: usize,
    config: SessionConfig,
    palette: Palette,
}

impl GifRecorder {
    /// Create a recorder drawing at the session's viewport size
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            frames: Vec::new(),
            pending: None,
            min_delay: Duration::from_millis(u64::from(VIEWER_MIN_FRAME_DELAY_MS)),
            captured: 0,
            config: config.clone(),
            palette: Palette::rainbow(config.num_bars()),
        }
    }

    /// Frames that will be exported, in order, with their accumulated holds
    pub fn frames(&self) -> impl DoubleEndedIterator<Item = &FrameSnapshot> {
        self.frames.iter().chain(self.pending.as_ref())
    }

    /// Returns the number of frames that will be exported
    pub fn frame_count(&self) -> usize {
        self.frames.len() + usize::from(self.pending.is_some())
    }

    /// Returns the number of renders received, before coalescing
    pub const fn captured_count(&self) -> usize {
        self.captured
    }

    /// Encode the recording as an infinitely looping GIF
    ///
    /// Every frame is shown for at least the viewer minimum. Returns the number
    /// of frames written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<usize> {
        if self.pending.is_none() {
            return Err(VisualizerError::EmptyRecording);
        }

        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let export_error = |source| VisualizerError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        for snapshot in self.frames() {
            let mut canvas = RgbaImage::new(self.config.width(), self.config.height());
            rasterize(
                &FrameView {
                    values: &snapshot.values,
                    palette: &self.palette,
                    config: &self.config,
                    phase: snapshot.phase,
                    hold: snapshot.hold,
                },
                &mut canvas,
            );
            encoder
                .encode_frame(Frame::from_parts(
                    canvas,
                    0,
                    0,
                    Delay::from_saturating_duration(snapshot.hold.max(self.min_delay)),
                ))
                .map_err(export_error)?;
        }

        Ok(self.frame_count())
    }
}

impl Renderer for GifRecorder {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<()> {
        self.captured += 1;

        match &mut self.pending {
            Some(pending) if pending.hold < self.min_delay => {
                pending.values.clear();
                pending.values.extend_from_slice(frame.values);
                pending.phase = frame.phase;
                pending.hold = pending.hold.saturating_add(frame.hold);
            }
            pending => {
                let next = FrameSnapshot {
                    values: frame.values.to_vec(),
                    phase: frame.phase,
                    hold: frame.hold,
                };
                if let Some(done) = pending.replace(next) {
                    self.frames.push(done);
                }
            }
        }
        Ok(())
    }
}
