//! Settings, command-line handling, recording and error types

/// Command-line parsing and session launch
pub mod cli;
/// Defaults, limits and timing constants
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Animated GIF recording of rendered frames
pub mod gif;
/// Spinner feedback for headless recording
pub mod progress;
/// Persisted settings and validated session parameters
pub mod settings;
