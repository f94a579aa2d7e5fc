//! Interactive terminal output using crossterm
//!
//! Frames are rasterized at two pixels per character cell and drawn with
//! upper-half-block glyphs in 24-bit colour. Waiting happens by polling
//! terminal input, so quit keys and resizes are handled during every pause
//! instead of after it.

use crate::animation::Phase;
use crate::animation::pacing::{CancellationToken, Pacer, Wake};
use crate::io::error::{Result, VisualizerError, WithContext};
use crate::io::settings::SessionConfig;
use crate::math::color::Color;
use crate::model::Palette;
use crate::render::overlay::{config_lines, phase_label};
use crate::render::raster::rasterize;
use crate::render::{FrameView, Renderer};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use image::RgbaImage;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const HALF_BLOCK: char = '▀';

/// Raw mode and alternate screen for the lifetime of the value
///
/// Dropping the session restores the terminal, also when unwinding from an
/// error.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Switch the terminal into full-screen drawing mode
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered
    pub fn enter() -> Result<Self> {
        enable_raw_mode().with_operation("enable raw mode")?;
        let session = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
            .with_operation("enter alternate screen")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

/// Owned copy of the frame on screen
struct LastFrame {
    values: Vec<u32>,
    palette: Palette,
    config: SessionConfig,
    phase: Phase,
    hold: Duration,
}

impl LastFrame {
    fn view(&self) -> FrameView<'_> {
        FrameView {
            values: &self.values,
            palette: &self.palette,
            config: &self.config,
            phase: self.phase,
            hold: self.hold,
        }
    }
}

/// Draws frames to a terminal-like writer
///
/// The last frame is kept so it can be drawn again at a new size.
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: RgbaImage,
    size: Option<(u16, u16)>,
    last: Option<LastFrame>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing escape sequences to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            canvas: RgbaImage::new(0, 0),
            size: None,
            last: None,
        }
    }

    /// The underlying writer
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Draw `frame` into a `cols × rows` character grid
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn draw(&mut self, frame: &FrameView<'_>, cols: u16, rows: u16) -> Result<()> {
        self.remember(frame);
        self.paint(frame, cols, rows)
    }

    /// Draw the last frame again into a `cols × rows` grid
    ///
    /// Does nothing before the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails
    pub fn redraw_at(&mut self, cols: u16, rows: u16) -> Result<()> {
        let Some(last) = self.last.take() else {
            return Ok(());
        };
        let outcome = self.paint(&last.view(), cols, rows);
        self.last = Some(last);
        outcome
    }

    fn remember(&mut self, frame: &FrameView<'_>) {
        match &mut self.last {
            Some(last) => {
                last.values.clear();
                last.values.extend_from_slice(frame.values);
                last.palette.clone_from(frame.palette);
                last.config.clone_from(frame.config);
                last.phase = frame.phase;
                last.hold = frame.hold;
            }
            None => {
                self.last = Some(LastFrame {
                    values: frame.values.to_vec(),
                    palette: frame.palette.clone(),
                    config: frame.config.clone(),
                    phase: frame.phase,
                    hold: frame.hold,
                });
            }
        }
    }

    fn paint(&mut self, frame: &FrameView<'_>, cols: u16, rows: u16) -> Result<()> {
        let resized = self.size != Some((cols, rows));
        if resized {
            self.canvas = RgbaImage::new(u32::from(cols), u32::from(rows) * 2);
            self.size = Some((cols, rows));
        }
        rasterize(frame, &mut self.canvas);

        self.queue_frame(frame, cols, rows, resized)
            .and_then(|()| self.out.flush())
            .with_operation("draw frame")
    }

    fn queue_frame(
        &mut self,
        frame: &FrameView<'_>,
        cols: u16,
        rows: u16,
        resized: bool,
    ) -> io::Result<()> {
        if resized {
            queue!(self.out, Clear(ClearType::All))?;
        }

        for row in 0..rows {
            queue!(self.out, MoveTo(0, row))?;
            let mut current: Option<(Color, Color)> = None;
            let y = u32::from(row) * 2;
            for col in 0..cols {
                let top = pixel(&self.canvas, u32::from(col), y);
                let bottom = pixel(&self.canvas, u32::from(col), y + 1);
                if current != Some((top, bottom)) {
                    queue!(
                        self.out,
                        SetForegroundColor(to_terminal(top)),
                        SetBackgroundColor(to_terminal(bottom))
                    )?;
                    current = Some((top, bottom));
                }
                queue!(self.out, Print(HALF_BLOCK))?;
            }
        }

        for (line, text) in (0..rows).zip(config_lines(frame.config)) {
            queue!(
                self.out,
                MoveTo(1, line),
                SetForegroundColor(to_terminal(Color::WHITE)),
                SetBackgroundColor(to_terminal(Color::BLACK)),
                Print(text)
            )?;
        }

        if let Some(label) = phase_label(frame.phase) {
            let padded = format!(" {label} ");
            let width = u16::try_from(padded.chars().count()).unwrap_or(cols);
            queue!(
                self.out,
                MoveTo(cols.saturating_sub(width) / 2, rows / 2),
                SetForegroundColor(to_terminal(Color::WHITE)),
                SetBackgroundColor(to_terminal(Color::GRAY)),
                Print(padded)
            )?;
        }

        queue!(self.out, ResetColor)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &FrameView<'_>) -> Result<()> {
        let (cols, rows) = terminal::size().with_operation("query terminal size")?;
        self.draw(frame, cols, rows)
    }

    fn redraw(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size().with_operation("query terminal size")?;
        self.redraw_at(cols, rows)
    }
}

/// Waits by polling terminal input so the loop stays responsive
///
/// A quit key cancels the shared token and aborts the wait at once. A resize
/// ends the wait with [`Wake::Redraw`].
#[derive(Debug, Clone)]
pub struct TerminalPacer {
    token: CancellationToken,
}

impl TerminalPacer {
    /// Create a pacer that cancels `token` on a quit key
    pub const fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl Pacer for TerminalPacer {
    fn wait(&mut self, duration: Duration) -> Result<Wake> {
        let deadline = Instant::now() + duration;
        loop {
            self.token.check()?;
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining).with_operation("poll input")? {
                return Ok(Wake::Elapsed);
            }
            match event::read().with_operation("read input")? {
                Event::Key(key) if is_quit_key(&key) => {
                    self.token.cancel();
                    return Err(VisualizerError::Interrupted);
                }
                Event::Resize(..) => return Ok(Wake::Redraw),
                _ => {}
            }
            if remaining.is_zero() {
                return Ok(Wake::Elapsed);
            }
        }
    }
}

/// Whether `key` asks to leave the visualization (`q`, `Esc` or `Ctrl-C`)
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// 24-bit terminal colour for a palette colour
pub const fn to_terminal(color: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn pixel(canvas: &RgbaImage, x: u32, y: u32) -> Color {
    canvas
        .get_pixel_checked(x, y)
        .map_or(Color::BLACK, |p| Color::new(p.0[0], p.0[1], p.0[2]))
}
