//! Abortable waits between animation steps

use crate::io::configuration::CANCEL_POLL_INTERVAL;
use crate::io::error::{Result, VisualizerError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared flag that stops the animation loop at its next wait
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with [`VisualizerError::Interrupted`] once cancelled
    ///
    /// # Errors
    ///
    /// Returns [`VisualizerError::Interrupted`] if cancellation was requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(VisualizerError::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// How a wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The requested time has passed
    Elapsed,
    /// The drawing surface changed; redraw the current frame, then keep waiting
    Redraw,
}

/// Suspends the animation between steps
pub trait Pacer {
    /// Wait for `duration`, returning early on cancellation or a redraw request
    ///
    /// # Errors
    ///
    /// Returns [`VisualizerError::Interrupted`] when the wait is aborted, or an
    /// I/O error from an interactive pacer
    fn wait(&mut self, duration: Duration) -> Result<Wake>;
}

/// Thread-blocking pacer for headless runs
///
/// With a token it sleeps in short slices so a cancellation from another
/// thread is noticed promptly; without one it is a plain sleep.
#[derive(Debug, Clone, Default)]
pub struct BlockingPacer {
    token: Option<CancellationToken>,
}

impl BlockingPacer {
    /// Create a pacer observing `token`
    pub const fn new(token: CancellationToken) -> Self {
        Self { token: Some(token) }
    }

    /// Create a pacer that cannot be cancelled
    pub const fn plain() -> Self {
        Self { token: None }
    }
}

impl Pacer for BlockingPacer {
    fn wait(&mut self, duration: Duration) -> Result<Wake> {
        let Some(token) = &self.token else {
            std::thread::sleep(duration);
            return Ok(Wake::Elapsed);
        };

        let deadline = Instant::now() + duration;
        token.check()?;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(Wake::Elapsed);
            }
            std::thread::sleep(remaining.min(CANCEL_POLL_INTERVAL));
            token.check()?;
        }
    }
}

/// Pacer that never sleeps, for recording and tests
///
/// Requested waits are tallied so callers can reason about the real-time
/// length of what ran.
#[derive(Debug, Clone, Default)]
pub struct ImmediatePacer {
    token: CancellationToken,
    waits: usize,
    requested: Duration,
}

impl ImmediatePacer {
    /// Create a pacer observing `token`
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// Number of waits requested
    pub const fn waits(&self) -> usize {
        self.waits
    }

    /// Sum of all requested wait durations
    pub const fn requested(&self) -> Duration {
        self.requested
    }
}

impl Pacer for ImmediatePacer {
    fn wait(&mut self, duration: Duration) -> Result<Wake> {
        self.token.check()?;
        self.waits += 1;
        self.requested = self.requested.saturating_add(duration);
        Ok(Wake::Elapsed)
    }
}
