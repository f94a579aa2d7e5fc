//! Tests for loading, saving and validating settings

#[cfg(test)]
mod tests {
    use sortviz::VisualizerError;
    use sortviz::algorithm::SortType;
    use sortviz::io::configuration::{DEFAULT_NUM_BARS, MAX_BARS, MAX_DIMENSION};
    use sortviz::io::settings::Settings;
    use sortviz::render::DisplayMethod;
    use std::time::Duration;
    use tempfile::TempDir;

    // Tests a missing file yields defaults without creating it
    // Verified by treating NotFound as an error
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(!path.exists());
    }

    // Tests saved settings load back unchanged
    // Verified by omitting a field from serialization
    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.txt");
        let settings = Settings {
            width: 640,
            height: 480,
            num_bars: 25,
            speed: 0.25,
            sort_type: SortType::Quick,
            show_config: false,
            display_method: DisplayMethod::Circle,
        };

        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    // Tests the on-disk key names and enum spellings
    // Verified by renaming a field
    #[test]
    fn test_saved_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");

        Settings::default().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        for key in [
            "\"width\"",
            "\"height\"",
            "\"num_bars\"",
            "\"speed\"",
            "\"sort_type\": \"Bubble\"",
            "\"show_config\"",
            "\"display_method\": \"Bars\"",
        ] {
            assert!(text.contains(key), "missing {key} in {text}");
        }
    }

    // Tests missing keys take their individual defaults
    // Verified by removing the serde default attribute
    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, r#"{"sort_type": "Merge", "display_method": "Spiral"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.sort_type, SortType::Merge);
        assert_eq!(settings.display_method, DisplayMethod::Spiral);
        assert_eq!(settings.num_bars, DEFAULT_NUM_BARS);
    }

    // Tests a malformed file is an error, not a silent reset
    // Verified by falling back to defaults on parse errors
    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, "{ width: 800").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(VisualizerError::ConfigParse { .. })
        ));
    }

    // Tests an unknown sort name is rejected
    // Verified by defaulting unknown variants
    #[test]
    fn test_load_unknown_sort() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, r#"{"sort_type": "Bogo"}"#).unwrap();

        assert!(Settings::load(&path).is_err());
    }

    // Tests validation freezes every field and converts the speed
    // Verified by dropping the step delay conversion
    #[test]
    fn test_validate_defaults() {
        let settings = Settings {
            speed: 0.5,
            ..Settings::default()
        };

        let config = settings.validate().unwrap();

        assert_eq!(config.width(), settings.width);
        assert_eq!(config.height(), settings.height);
        assert_eq!(config.num_bars(), settings.num_bars);
        assert_eq!(config.step_delay(), Duration::from_millis(500));
        assert_eq!(config.sort_type(), SortType::Bubble);
        assert_eq!(config.display_method(), DisplayMethod::Bars);
        assert!(config.show_config());
    }

    // Tests zero speed is allowed
    // Verified by requiring a positive speed
    #[test]
    fn test_validate_zero_speed() {
        let settings = Settings {
            speed: 0.0,
            ..Settings::default()
        };

        assert_eq!(settings.validate().unwrap().step_delay(), Duration::ZERO);
    }

    // Tests out-of-range numeric fields are rejected by name
    // Verified by removing a range check
    #[test]
    fn test_validate_rejects_out_of_range() {
        let cases = [
            (
                "width",
                Settings {
                    width: 0,
                    ..Settings::default()
                },
            ),
            (
                "height",
                Settings {
                    height: MAX_DIMENSION + 1,
                    ..Settings::default()
                },
            ),
            (
                "num_bars",
                Settings {
                    num_bars: 0,
                    ..Settings::default()
                },
            ),
            (
                "num_bars",
                Settings {
                    num_bars: MAX_BARS + 1,
                    ..Settings::default()
                },
            ),
            (
                "speed",
                Settings {
                    speed: -0.1,
                    ..Settings::default()
                },
            ),
            (
                "speed",
                Settings {
                    speed: f64::NAN,
                    ..Settings::default()
                },
            ),
        ];

        for (expected, settings) in cases {
            match settings.validate() {
                Err(VisualizerError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected invalid {expected}, got {other:?}"),
            }
        }
    }
}
