//! Command-line interface: settings resolution and session launch

use crate::algorithm::SortType;
use crate::animation::{
    AnimationDriver, BlockingPacer, CancellationToken, CycleReport, ImmediatePacer, Pacer,
    RunSummary,
};
use crate::io::configuration::{DEFAULT_CONFIG_FILE, DEFAULT_RECORD_CYCLES};
use crate::io::error::Result;
use crate::io::gif::GifRecorder;
use crate::io::progress::ProgressRenderer;
use crate::io::settings::{SessionConfig, Settings};
use crate::render::terminal::{TerminalPacer, TerminalRenderer, TerminalSession};
use crate::render::{DisplayMethod, NullRenderer, Renderer};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sortviz")]
#[command(
    author,
    version,
    about = "Animate comparison sorts on a shuffled array, forever"
)]
/// Command-line arguments; every setting overrides the settings file
pub struct Cli {
    /// Settings file, created with the effective values on start
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Render width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Render height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Number of values to sort
    #[arg(short = 'n', long = "bars")]
    pub num_bars: Option<usize>,

    /// Delay after each sort step, in seconds
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Sorting algorithm
    #[arg(short = 'a', long = "sort", value_enum)]
    pub sort_type: Option<SortType>,

    /// Display method
    #[arg(short, long = "display", value_enum)]
    pub display_method: Option<DisplayMethod>,

    /// Show or hide the configuration overlay
    #[arg(long, value_name = "BOOL")]
    pub show_config: Option<bool>,

    /// Random seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record a headless run to this GIF instead of drawing in the terminal
    #[arg(short, long, value_name = "GIF")]
    pub record: Option<PathBuf>,

    /// Stop after this many shuffle and sort cycles
    #[arg(long)]
    pub cycles: Option<usize>,

    /// Do not write the effective settings back to the settings file
    #[arg(long)]
    pub no_save: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Replace every setting given on the command line
    pub fn apply_overrides(&self, settings: Settings) -> Settings {
        Settings {
            width: self.width.unwrap_or(settings.width),
            height: self.height.unwrap_or(settings.height),
            num_bars: self.num_bars.unwrap_or(settings.num_bars),
            speed: self.speed.unwrap_or(settings.speed),
            sort_type: self.sort_type.unwrap_or(settings.sort_type),
            show_config: self.show_config.unwrap_or(settings.show_config),
            display_method: self.display_method.unwrap_or(settings.display_method),
        }
    }

    /// Number of cycles to run; recordings default to a single cycle
    pub const fn cycle_limit(&self) -> Option<usize> {
        match (&self.record, self.cycles) {
            (_, Some(cycles)) => Some(cycles),
            (Some(_), None) => Some(DEFAULT_RECORD_CYCLES),
            (None, None) => None,
        }
    }

    /// Check if settings should be written back
    pub const fn should_save(&self) -> bool {
        !self.no_save
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Resolves settings and runs one session in the mode the arguments select
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, override, validate and optionally save the settings
    ///
    /// Invalid values are rejected before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file is unreadable or malformed, a
    /// value is invalid, or saving fails
    pub fn resolve_config(&self) -> Result<SessionConfig> {
        let settings = self.cli.apply_overrides(Settings::load(&self.cli.config)?);
        let config = settings.validate()?;
        if self.cli.should_save() {
            settings.save(&self.cli.config)?;
        }
        Ok(config)
    }

    /// Run the session until its cycle limit or until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if settings resolution, rendering or export fails
    pub fn run(&self) -> Result<RunSummary> {
        let config = self.resolve_config()?;
        let rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        match &self.cli.record {
            Some(path) => self.record(config, rng, path),
            None if std::io::stdout().is_terminal() => self.interactive(config, rng),
            None => self.headless(config, rng),
        }
    }

    fn interactive(&self, config: SessionConfig, rng: StdRng) -> Result<RunSummary> {
        let token = CancellationToken::new();
        let summary = {
            let _session = TerminalSession::enter()?;
            let renderer = TerminalRenderer::new(std::io::stdout());
            let mut driver =
                AnimationDriver::new(config, renderer, TerminalPacer::new(token), rng)?;
            driver.run(self.cli.cycle_limit(), |_| {})?
        };
        self.report_summary(&summary);
        Ok(summary)
    }

    fn headless(&self, config: SessionConfig, rng: StdRng) -> Result<RunSummary> {
        let summary = self.drive(config, NullRenderer, BlockingPacer::plain(), rng)?;
        self.report_summary(&summary);
        Ok(summary)
    }

    // Allow print for user feedback on the written recording
    #[allow(clippy::print_stderr)]
    fn record(&self, config: SessionConfig, rng: StdRng, path: &Path) -> Result<RunSummary> {
        let recorder = ProgressRenderer::new(
            GifRecorder::new(&config),
            self.cli.should_show_progress(),
        );
        let pacer = ImmediatePacer::new(CancellationToken::new());
        let mut driver = AnimationDriver::new(config, recorder, pacer, rng)?;
        let summary = driver.run(self.cli.cycle_limit(), |_| {})?;

        let recording = driver.into_renderer().finish();
        let frames = recording.export_gif(path)?;
        if self.cli.should_show_progress() {
            eprintln!(
                "Recorded {} cycle(s), {frames} frames to {}",
                summary.cycles_completed,
                path.display()
            );
        }
        Ok(summary)
    }

    // Allow print for per-cycle status lines in headless mode
    #[allow(clippy::print_stderr)]
    fn drive<R: Renderer, P: Pacer>(
        &self,
        config: SessionConfig,
        renderer: R,
        pacer: P,
        rng: StdRng,
    ) -> Result<RunSummary> {
        let quiet = self.cli.quiet;
        let sort_type = config.sort_type();
        let mut driver = AnimationDriver::new(config, renderer, pacer, rng)?;
        driver.run(self.cli.cycle_limit(), |report: &CycleReport| {
            if !quiet {
                eprintln!(
                    "{sort_type} sort: {} steps, {} swaps, {} writes in {:.2?}",
                    report.sort_steps, report.swaps, report.writes, report.sort_duration
                );
            }
        })
    }

    // Allow print for the closing status line
    #[allow(clippy::print_stderr)]
    fn report_summary(&self, summary: &RunSummary) {
        if self.cli.should_show_progress() {
            eprintln!(
                "{} after {} cycle(s), {} steps",
                if summary.interrupted {
                    "Stopped"
                } else {
                    "Finished"
                },
                summary.cycles_completed,
                summary.total_steps
            );
        }
    }
}
