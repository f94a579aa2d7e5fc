//! Error types and context management for visualizer operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all visualizer operations
#[derive(Debug)]
pub enum VisualizerError {
    /// Settings file exists but could not be parsed
    ///
    /// Distinct from a missing file, which falls back to defaults
    ConfigParse {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Settings could not be serialized for saving
    ConfigSerialize {
        /// Path the settings were destined for
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed before a session could start
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Array position outside the model
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the array model
        len: usize,
    },

    /// Values handed to the array model are not a permutation of `1..=N`
    InvalidValues {
        /// Description of what's wrong with the values
        reason: String,
    },

    /// Failed to encode or write an animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// An export was requested before any frame was recorded
    EmptyRecording,

    /// Terminal output or input failed
    Terminal {
        /// Description of the terminal operation
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The animation loop was cancelled from outside
    Interrupted,
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse settings '{}': {source}", path.display())
            }
            Self::ConfigSerialize { path, source } => {
                write!(
                    f,
                    "Failed to serialize settings for '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} is out of bounds (len: {len})")
            }
            Self::InvalidValues { reason } => {
                write!(f, "Invalid array values: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyRecording => write!(f, "No frames captured for the animation"),
            Self::Terminal { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
            Self::Interrupted => write!(f, "Animation interrupted"),
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } | Self::ConfigSerialize { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } | Self::Terminal { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualizer results
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Attaches the failing path or terminal operation to raw I/O errors
pub trait WithContext<T> {
    /// Report the error as a file system failure on `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`VisualizerError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;

    /// Report the error as a terminal failure
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`VisualizerError::Terminal`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithContext<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| VisualizerError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| VisualizerError::Terminal { operation, source })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VisualizerError {
    VisualizerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for an array position
pub const fn out_of_bounds(index: usize, len: usize) -> VisualizerError {
    VisualizerError::IndexOutOfBounds { index, len }
}

impl VisualizerError {
    /// Whether this error is the cancellation signal rather than a failure
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}
