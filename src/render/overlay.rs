use crate::animation::Phase;
use crate::io::configuration::SHUFFLING_LABEL;
use crate::io::settings::SessionConfig;

/// Text lines describing the active configuration
///
/// Empty when the overlay is disabled.
pub fn config_lines(config: &SessionConfig) -> Vec<String> {
    if !config.show_config() {
        return Vec::new();
    }

    vec![
        format!("Width: {}", config.width()),
        format!("Height: {}", config.height()),
        format!("Number of Bars: {}", config.num_bars()),
        format!("Speed: {}", config.speed()),
        format!("Sort Type: {}", config.sort_type()),
        format!("Display Method: {}", config.display_method()),
    ]
}

/// Transient label for the current phase, if any
pub fn phase_label(phase: Phase) -> Option<&'static str> {
    phase.shows_shuffle_label().then_some(SHUFFLING_LABEL)
}
