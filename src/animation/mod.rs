//! Scheduling of the shuffle, sort and pause loop

/// The control loop that owns a running session
pub mod driver;
/// Abortable waits and cancellation
pub mod pacing;
/// Loop states
pub mod phase;
/// Animated shuffling
pub mod shuffle;

pub use driver::{AnimationDriver, CycleReport, RunSummary};
pub use pacing::{BlockingPacer, CancellationToken, ImmediatePacer, Pacer, Wake};
pub use phase::Phase;
