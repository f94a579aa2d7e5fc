//! The control loop that owns a running session
//!
//! One driver owns the array, palette and configuration of a session and is
//! the only thing that mutates the array. Each step event renders the whole
//! state and then blocks on the pacer, so the sort itself sets the pace.

use crate::algorithm::{StepObserver, run_sort};
use crate::animation::pacing::{Pacer, Wake};
use crate::animation::phase::Phase;
use crate::animation::shuffle::animate_shuffle;
use crate::io::configuration::{PAUSE_AFTER_SORT, SHUFFLE_SPEEDUP, START_DELAY};
use crate::io::error::Result;
use crate::io::settings::SessionConfig;
use crate::model::{ArrayModel, Palette};
use crate::render::{FrameView, Renderer};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// What happened during one shuffle, sort and pause cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    /// Step events emitted while shuffling
    pub shuffle_steps: usize,
    /// Step events emitted while sorting
    pub sort_steps: usize,
    /// Swaps performed by the sort engine
    pub swaps: usize,
    /// Positional writes performed by the sort engine
    pub writes: usize,
    /// Wall-clock time spent sorting, including waits
    pub sort_duration: Duration,
}

/// Outcome of [`AnimationDriver::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Cycles that ran through their pause
    pub cycles_completed: usize,
    /// Step events across all phases
    pub total_steps: usize,
    /// Whether the loop ended through cancellation
    pub interrupted: bool,
}

/// Sequences `Idle → Shuffling → Sorting → Pausing → Shuffling → …`
pub struct AnimationDriver<R, P> {
    config: SessionConfig,
    array: ArrayModel,
    palette: Palette,
    renderer: R,
    pacer: P,
    rng: StdRng,
    phase: Phase,
    total_steps: usize,
}

impl<R: Renderer, P: Pacer> AnimationDriver<R, P> {
    /// Create a session with a freshly shuffled array
    ///
    /// # Errors
    ///
    /// Returns an error if the configured bar count cannot be represented
    pub fn new(config: SessionConfig, renderer: R, pacer: P, mut rng: StdRng) -> Result<Self> {
        let mut array = ArrayModel::sorted(config.num_bars())?;
        array.shuffle(&mut rng);
        let palette = Palette::rainbow(config.num_bars());

        Ok(Self {
            config,
            array,
            palette,
            renderer,
            pacer,
            rng,
            phase: Phase::Idle,
            total_steps: 0,
        })
    }

    /// Current loop phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The array as last mutated
    pub const fn array(&self) -> &ArrayModel {
        &self.array
    }

    /// The session palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The session parameters
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The renderer receiving frames
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The pacer performing waits
    pub const fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Give back the renderer, ending the session
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Draw the initial state and wait before the first cycle
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the wait is interrupted
    pub fn start(&mut self) -> Result<()> {
        self.phase = Phase::Idle;
        self.hold(START_DELAY)
    }

    /// Run one shuffle, sort and pause cycle
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or a wait is interrupted; the array
    /// is left as a valid permutation either way
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        let shuffle_delay = self.config.step_delay() / SHUFFLE_SPEEDUP;
        let shuffle_steps = self.paced(Phase::Shuffling, shuffle_delay, |array, rng, steps| {
            animate_shuffle(array, rng, steps)
        })?;

        self.array.reset_counters();
        let started = Instant::now();
        let sort_type = self.config.sort_type();
        let sort_steps = self.paced(Phase::Sorting, self.config.step_delay(), |array, _, steps| {
            run_sort(sort_type, array, steps)
        })?;
        let sort_duration = started.elapsed();

        self.phase = Phase::Pausing;
        self.hold(PAUSE_AFTER_SORT)?;

        Ok(CycleReport {
            shuffle_steps,
            sort_steps,
            swaps: self.array.swap_count(),
            writes: self.array.write_count(),
            sort_duration,
        })
    }

    /// Start the session and loop until `limit` cycles or cancellation
    ///
    /// `on_cycle` sees the report of every completed cycle. Cancellation is a
    /// normal way to end and is reported through [`RunSummary::interrupted`].
    ///
    /// # Errors
    ///
    /// Returns any error other than cancellation
    pub fn run<F>(&mut self, limit: Option<usize>, mut on_cycle: F) -> Result<RunSummary>
    where
        F: FnMut(&CycleReport),
    {
        let mut summary = RunSummary::default();

        let outcome = self.start().and_then(|()| {
            while limit.is_none_or(|max| summary.cycles_completed < max) {
                let report = self.run_cycle()?;
                summary.cycles_completed += 1;
                on_cycle(&report);
            }
            Ok(())
        });

        summary.total_steps = self.total_steps;
        match outcome {
            Ok(()) => Ok(summary),
            Err(err) if err.is_interrupted() => {
                self.phase = Phase::Stopped;
                summary.interrupted = true;
                Ok(summary)
            }
            Err(err) => Err(err),
        }
    }

    /// Enter `phase` and run `work` with a step observer pacing at `delay`
    fn paced<F>(&mut self, phase: Phase, delay: Duration, work: F) -> Result<usize>
    where
        F: FnOnce(&mut ArrayModel, &mut StdRng, &mut PacedSteps<'_, R, P>) -> Result<()>,
    {
        self.phase = phase;
        let Self {
            config,
            array,
            palette,
            renderer,
            pacer,
            rng,
            total_steps,
            ..
        } = self;

        let mut steps = PacedSteps {
            renderer,
            pacer,
            palette,
            config,
            phase,
            delay,
            steps: 0,
        };
        let outcome = work(array, rng, &mut steps);
        *total_steps += steps.steps;
        outcome.map(|()| steps.steps)
    }

    /// Render the current phase once and wait for `duration`
    fn hold(&mut self, duration: Duration) -> Result<()> {
        self.renderer.render(&FrameView {
            values: self.array.values(),
            palette: &self.palette,
            config: &self.config,
            phase: self.phase,
            hold: duration,
        })?;
        pause(&mut self.renderer, &mut self.pacer, duration)
    }
}

/// Wait for `duration`, redrawing the current frame whenever the pacer asks
fn pause<R: Renderer, P: Pacer>(
    renderer: &mut R,
    pacer: &mut P,
    duration: Duration,
) -> Result<()> {
    let deadline = Instant::now() + duration;
    let mut remaining = duration;
    while pacer.wait(remaining)? == Wake::Redraw {
        renderer.redraw()?;
        remaining = deadline.saturating_duration_since(Instant::now());
    }
    Ok(())
}

/// Step observer that redraws and then waits
struct PacedSteps<'a, R, P> {
    renderer: &'a mut R,
    pacer: &'a mut P,
    palette: &'a Palette,
    config: &'a SessionConfig,
    phase: Phase,
    delay: Duration,
    steps: usize,
}

impl<R: Renderer, P: Pacer> StepObserver for PacedSteps<'_, R, P> {
    fn on_step(&mut self, array: &ArrayModel) -> Result<()> {
        self.renderer.render(&FrameView {
            values: array.values(),
            palette: self.palette,
            config: self.config,
            phase: self.phase,
            hold: self.delay,
        })?;
        self.steps += 1;
        pause(self.renderer, self.pacer, self.delay)
    }
}
