//! Tests for command-line parsing, validation, and end-to-end runs

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use penrosetile::io::cli::{Cli, TilingRunner};
    use penrosetile::io::configuration::{
        DEFAULT_GENERATIONS, DEFAULT_IMAGE_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_QUADRANCE,
        DEFAULT_SEED_NAME, MAX_GENERATIONS,
    };
    use penrosetile::io::error::TilingError;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["penrosetile"]);

        assert_eq!(cli.seed, DEFAULT_SEED_NAME);
        assert_eq!(cli.generations, DEFAULT_GENERATIONS);
        assert_eq!(cli.quadrance, DEFAULT_QUADRANCE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.size, DEFAULT_IMAGE_SIZE);
        assert!(cli.image.is_none());
        assert!(cli.face_visible());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "penrosetile",
            "--seed",
            "cartwheel",
            "-g",
            "3",
            "-Q",
            "2.5",
            "--no-faces",
            "-o",
            "out/t.json",
            "--image",
            "out/t.png",
            "--size",
            "256",
            "--verbose",
        ]);

        assert_eq!(cli.seed, "cartwheel");
        assert_eq!(cli.generations, 3);
        assert_eq!(cli.quadrance, 2.5);
        assert!(!cli.face_visible());
        assert_eq!(cli.output, PathBuf::from("out/t.json"));
        assert_eq!(cli.image, Some(PathBuf::from("out/t.png")));
        assert_eq!(cli.size, 256);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["penrosetile", "-q", "-v"]).is_err());

        let quiet = Cli::parse_from(["penrosetile", "--quiet"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.log_level(), tracing::Level::ERROR);
    }

    // Tests validation of quadrance, image size, and generation count
    // Verified by accepting zero quadrance
    #[test]
    fn test_tiling_config_validation() {
        let zero_q = Cli::parse_from(["penrosetile", "-Q", "0"]);
        assert!(matches!(
            zero_q.tiling_config(),
            Err(TilingError::InvalidParameter {
                parameter: "quadrance",
                ..
            })
        ));

        let nan_q = Cli::parse_from(["penrosetile", "-Q", "NaN"]);
        assert!(nan_q.tiling_config().is_err());

        let huge = Cli::parse_from(["penrosetile", "--size", "100000"]);
        assert!(matches!(
            huge.tiling_config(),
            Err(TilingError::InvalidParameter {
                parameter: "size",
                ..
            })
        ));

        let too_many = (MAX_GENERATIONS + 1).to_string();
        let deep = Cli::parse_from(["penrosetile", "-g", too_many.as_str()]);
        assert!(deep.tiling_config().is_err());

        let ok = Cli::parse_from(["penrosetile", "-s", "sun", "-g", "2"]);
        let config = ok.tiling_config().unwrap();
        assert_eq!(config.seed, "sun");
        assert_eq!(config.generations.get(), 2);
    }

    #[test]
    fn test_resolved_seed_name() {
        let known = Cli::parse_from(["penrosetile", "--seed", "Single-Dart"]);
        assert_eq!(known.resolved_seed_name(), "single-dart");

        let unknown = Cli::parse_from(["penrosetile", "--seed", "pinwheel"]);
        assert_eq!(unknown.resolved_seed_name(), "single-thick");
    }

    // Tests a full run writes the JSON document and the preview
    // Verified by skipping the image export branch
    #[test]
    fn test_runner_writes_outputs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("tiling.json");
        let image = temp_dir.path().join("tiling.png");

        let cli = Cli::parse_from([
            "penrosetile",
            "-s",
            "single-thick",
            "-g",
            "2",
            "-q",
            "-o",
            output.to_str().unwrap(),
            "-i",
            image.to_str().unwrap(),
            "--size",
            "64",
        ]);
        let statistics = TilingRunner::new(cli).run().unwrap();

        assert_eq!(statistics.tile_count, 8);
        assert!(image.exists());

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["seed"], "single-thick");
        assert_eq!(json["generations"], 2);
        assert_eq!(json["geometry"]["metadata"]["tile_count"], 8);
        assert_eq!(json["geometry"]["edges"].as_array().unwrap().len(), 32);
    }

    // Tests that invalid arguments fail before anything is written
    #[test]
    fn test_runner_rejects_invalid_arguments() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("never.json");
        let cli = Cli::parse_from([
            "penrosetile",
            "-q",
            "--quadrance=-1",
            "-o",
            output.to_str().unwrap(),
        ]);

        assert!(TilingRunner::new(cli).run().is_err());
        assert!(!output.exists());
    }

    // Tests the quadrance help names what the value measures for rhombi
    #[test]
    fn test_quadrance_help() {
        let command = Cli::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "quadrance")
            .and_then(|arg| arg.get_help())
            .map(ToString::to_string)
            .unwrap();

        assert!(help.contains("short diagonal"), "{help}");
        assert!(!help.contains("edge length"), "{help}");
    }
}
