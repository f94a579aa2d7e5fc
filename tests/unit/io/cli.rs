//! Tests for command-line parsing and session launch

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use sortviz::VisualizerError;
    use sortviz::algorithm::SortType;
    use sortviz::io::cli::{Cli, SessionRunner};
    use sortviz::io::configuration::DEFAULT_CONFIG_FILE;
    use sortviz::io::settings::Settings;
    use sortviz::render::DisplayMethod;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests the argument definitions are internally consistent
    // Verified by giving two flags the same short name
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(cli.width.is_none());
        assert!(cli.sort_type.is_none());
        assert!(cli.record.is_none());
        assert_eq!(cli.cycle_limit(), None);
        assert!(cli.should_save());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all setting overrides
    // Verified by modifying value enum names
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--config",
            "viz.json",
            "--width",
            "320",
            "--height",
            "240",
            "--bars",
            "12",
            "--speed",
            "0.1",
            "--sort",
            "quick",
            "--display",
            "circle",
            "--show-config",
            "false",
            "--seed",
            "9",
            "--cycles",
            "3",
            "--no-save",
            "--quiet",
        ]);

        assert_eq!(cli.config, PathBuf::from("viz.json"));
        assert_eq!(cli.width, Some(320));
        assert_eq!(cli.height, Some(240));
        assert_eq!(cli.num_bars, Some(12));
        assert_eq!(cli.sort_type, Some(SortType::Quick));
        assert_eq!(cli.display_method, Some(DisplayMethod::Circle));
        assert_eq!(cli.show_config, Some(false));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.cycle_limit(), Some(3));
        assert!(!cli.should_save());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "-W", "100", "-H", "50", "-n", "7", "-a", "merge", "-d", "spiral", "-q",
        ]);

        assert_eq!(cli.width, Some(100));
        assert_eq!(cli.height, Some(50));
        assert_eq!(cli.num_bars, Some(7));
        assert_eq!(cli.sort_type, Some(SortType::Merge));
        assert_eq!(cli.display_method, Some(DisplayMethod::Spiral));
        assert!(cli.quiet);
    }

    // Tests an unknown algorithm name is rejected
    // Verified by accepting arbitrary strings
    #[test]
    fn test_cli_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["program", "--sort", "bogo"]).is_err());
    }

    // Tests recordings default to one cycle
    // Verified by leaving recordings unbounded
    #[test]
    fn test_record_cycle_limit() {
        let cli = Cli::parse_from(["program", "--record", "out.gif"]);
        assert_eq!(cli.cycle_limit(), Some(1));

        let cli = Cli::parse_from(["program", "--record", "out.gif", "--cycles", "4"]);
        assert_eq!(cli.cycle_limit(), Some(4));
    }

    // Tests only given flags override file settings
    // Verified by overriding with defaults unconditionally
    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["program", "--bars", "9", "--display", "spiral"]);
        let file = Settings {
            width: 300,
            sort_type: SortType::Insertion,
            ..Settings::default()
        };

        let merged = cli.apply_overrides(file.clone());

        assert_eq!(merged.num_bars, 9);
        assert_eq!(merged.display_method, DisplayMethod::Spiral);
        assert_eq!(merged.width, 300);
        assert_eq!(merged.sort_type, SortType::Insertion);
        assert_eq!(merged.height, file.height);
    }

    // Tests resolved settings are written back to the settings file
    // Verified by skipping the save
    #[test]
    fn test_resolve_config_saves() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        let cli = Cli::parse_from([
            "program",
            "--config",
            path.to_str().unwrap(),
            "--bars",
            "15",
        ]);

        let config = SessionRunner::new(cli).resolve_config().unwrap();

        assert_eq!(config.num_bars(), 15);
        assert_eq!(Settings::load(&path).unwrap().num_bars, 15);
    }

    // Tests invalid settings are rejected before anything is written
    // Verified by saving before validation
    #[test]
    fn test_resolve_config_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        let cli = Cli::parse_from([
            "program",
            "--config",
            path.to_str().unwrap(),
            "--bars",
            "0",
        ]);

        let result = SessionRunner::new(cli).resolve_config();

        assert!(matches!(
            result,
            Err(VisualizerError::InvalidParameter {
                parameter: "num_bars",
                ..
            })
        ));
        assert!(!path.exists());
    }

    // Tests --no-save leaves the settings file alone
    // Verified by inverting the no-save flag
    #[test]
    fn test_resolve_config_no_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.txt");
        let cli = Cli::parse_from([
            "program",
            "--config",
            path.to_str().unwrap(),
            "--no-save",
        ]);

        SessionRunner::new(cli).resolve_config().unwrap();

        assert!(!path.exists());
    }

    // Tests a recorded run writes a GIF and finishes its cycle
    // Verified by exporting before the run completes
    #[test]
    fn test_record_session() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.txt");
        let output = dir.path().join("out").join("sort.gif");
        let cli = Cli::parse_from([
            "program",
            "--config",
            config.to_str().unwrap(),
            "--record",
            output.to_str().unwrap(),
            "-W",
            "40",
            "-H",
            "20",
            "-n",
            "6",
            "--seed",
            "3",
            "--quiet",
        ]);

        let summary = SessionRunner::new(cli).run().unwrap();

        assert_eq!(summary.cycles_completed, 1);
        assert!(!summary.interrupted);
        assert!(output.exists());
        assert!(config.exists());
    }
}
