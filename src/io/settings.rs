//! Persisted visualization settings and their validated session form
//!
//! Settings are stored as a flat JSON object. A missing file yields the
//! defaults; a file that exists but cannot be parsed is an error, never a
//! silent reset.

use crate::algorithm::SortType;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_NUM_BARS, DEFAULT_SHOW_CONFIG, DEFAULT_SPEED, DEFAULT_WIDTH, MAX_BARS,
    MAX_DIMENSION,
};
use crate::io::error::{Result, VisualizerError, WithContext, invalid_parameter};
use crate::render::DisplayMethod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Settings record as read from and written to disk
///
/// Keys absent from the file take their individual defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render width in pixels
    pub width: u32,
    /// Render height in pixels
    pub height: u32,
    /// Number of values to sort
    pub num_bars: usize,
    /// Delay after each sort step, in seconds
    pub speed: f64,
    /// Algorithm to animate
    pub sort_type: SortType,
    /// Whether to show the configuration overlay
    pub show_config: bool,
    /// How the array is drawn
    pub display_method: DisplayMethod,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_bars: DEFAULT_NUM_BARS,
            speed: DEFAULT_SPEED,
            sort_type: SortType::default(),
            show_config: DEFAULT_SHOW_CONFIG,
            display_method: DisplayMethod::default(),
        }
    }
}

impl Settings {
    /// Read settings from `path`, or the defaults if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The contents are not a valid settings object
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err).with_path(path, "read settings"),
        };

        serde_json::from_str(&text).map_err(|source| VisualizerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write settings to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file system operation fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let text =
            serde_json::to_string_pretty(self).map_err(|source| VisualizerError::ConfigSerialize {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        std::fs::write(path, text).with_path(path, "write settings")
    }

    /// Check every numeric field and freeze the result for a session
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension or the bar count is zero or above its
    /// limit, or if the speed is negative or not finite
    pub fn validate(&self) -> Result<SessionConfig> {
        check_range("width", self.width, 1, MAX_DIMENSION)?;
        check_range("height", self.height, 1, MAX_DIMENSION)?;
        check_range("num_bars", self.num_bars, 1, MAX_BARS)?;

        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid_parameter(
                "speed",
                &self.speed,
                &"must be a finite number of seconds, zero or more",
            ));
        }
        let step_delay = Duration::try_from_secs_f64(self.speed)
            .map_err(|err| invalid_parameter("speed", &self.speed, &err))?;

        Ok(SessionConfig {
            width: self.width,
            height: self.height,
            num_bars: self.num_bars,
            speed: self.speed,
            step_delay,
            sort_type: self.sort_type,
            display_method: self.display_method,
            show_config: self.show_config,
        })
    }
}

fn check_range<T>(parameter: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + fmt::Display,
{
    if value < min || value > max {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Validated, immutable parameters of one session
///
/// Changing any of them requires a new session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    width: u32,
    height: u32,
    num_bars: usize,
    speed: f64,
    step_delay: Duration,
    sort_type: SortType,
    display_method: DisplayMethod,
    show_config: bool,
}

impl SessionConfig {
    /// Render width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Render height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of values being sorted
    pub const fn num_bars(&self) -> usize {
        self.num_bars
    }

    /// Step delay in seconds, as configured
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Wait after each sort step
    pub const fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Algorithm to animate
    pub const fn sort_type(&self) -> SortType {
        self.sort_type
    }

    /// How the array is drawn
    pub const fn display_method(&self) -> DisplayMethod {
        self.display_method
    }

    /// Whether the configuration overlay is shown
    pub const fn show_config(&self) -> bool {
        self.show_config
    }
}
