//! Visualizer constants and runtime configuration defaults

use std::time::Duration;

// Default values for persisted settings
/// Default render width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default render height in pixels
pub const DEFAULT_HEIGHT: u32 = 400;
/// Default number of values being sorted
pub const DEFAULT_NUM_BARS: usize = 50;
/// Default delay after each sort step, in seconds
pub const DEFAULT_SPEED: f64 = 0.05;
/// Default for the configuration overlay
pub const DEFAULT_SHOW_CONFIG: bool = true;

/// Settings file used when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed render dimension
pub const MAX_DIMENSION: u32 = 10_000;
/// Maximum allowed number of bars
pub const MAX_BARS: usize = 10_000;

// Animation timing
/// Wait between the initial draw and the first shuffle
pub const START_DELAY: Duration = Duration::from_secs(1);
/// Wait after a completed sort before shuffling again
pub const PAUSE_AFTER_SORT: Duration = Duration::from_secs(2);
/// Shuffle steps run this many times faster than sort steps
pub const SHUFFLE_SPEEDUP: u32 = 2;
/// Longest uninterrupted sleep of the blocking pacer
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

// Overlay text
/// Label shown while the array is being shuffled
pub const SHUFFLING_LABEL: &str = "Shuffling";

// Spiral and circle geometry
/// Outer radius is the smaller viewport side divided by this
pub const RADIUS_DIVISOR: f64 = 2.5;
/// Stroke width of spiral spokes in pixels
pub const SPOKE_WIDTH: u32 = 2;

// Output settings
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Cycles recorded when `--record` is given without `--cycles`
pub const DEFAULT_RECORD_CYCLES: usize = 1;
/// Steady tick of the headless spinner
pub const SPINNER_TICK_MS: u64 = 100;
