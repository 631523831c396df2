//! Tests for argument parsing and console output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use latticeart::io::cli::{ArtRunner, Cli, init_tracing, write_creation};
    use latticeart::io::progress::ProgressManager;
    use latticeart::render::{ColorMode, RenderStyle, SymbolRenderer};
    use latticeart::session::Creation;
    use latticeart::spatial::Lattice;
    use tracing::Level;

    fn run_to_string(command_line: &str) -> String {
        let cli = Cli::parse_from(command_line.split_whitespace());
        let mut runner = ArtRunner::new(cli, Vec::new()).expect("runner");
        runner.run().expect("run");
        String::from_utf8(runner.into_output()).expect("utf-8 output")
    }

    // Tests defaults when no flags are given
    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["latticeart"]);
        assert_eq!((cli.precision, cli.width, cli.height), (500, 80, 24));
        assert_eq!(cli.count, 1);
        assert_eq!(cli.steps, None);
        assert_eq!(cli.style, RenderStyle::Pathway);
        assert_eq!(cli.color, ColorMode::Off);
        assert_eq!(cli.delay, 500);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    // Tests short and long flags map onto the session configuration
    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::parse_from([
            "latticeart",
            "-p",
            "120",
            "-W",
            "30",
            "-H",
            "10",
            "--style",
            "classic",
            "--color",
            "palette256",
            "-q",
            "-v",
        ]);
        let config = cli.session_config();
        assert_eq!(
            (config.precision, config.width, config.height),
            (120, 30, 10)
        );
        assert_eq!(config.style, RenderStyle::Classic);
        assert_eq!(config.color, ColorMode::Palette256);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    // Tests a pinned cursor makes the whole run reproducible
    #[test]
    fn test_pinned_position_is_reproducible() {
        let command_line = "latticeart -q -W 20 -H 8 --position 42 -s 6 -n 2";
        let first = run_to_string(command_line);
        let second = run_to_string(command_line);
        assert_eq!(first, second);

        assert!(first.starts_with("Creation #1 | Evolution Steps: 6 | Sequence Position: 106\n"));
        assert!(first.contains("Creation #2 | Evolution Steps: 6 | Sequence Position: 170\n"));
        assert_eq!(first.matches(&"=".repeat(80)).count(), 4);
    }

    // Tests metrics and checkpoint lines follow the art when requested
    #[test]
    fn test_metrics_output() {
        let output = run_to_string("latticeart -q -W 16 -H 8 --position 0 -s 3 -m");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + 1 + 8 + 1 + 2);

        let metrics = lines.get(11).copied().unwrap_or_default();
        assert!(metrics.starts_with("Active: "));
        let checkpoints = lines.get(12).copied().unwrap_or_default();
        assert!(checkpoints.starts_with("Checkpoints: pathway_continuity: "));
        assert!(checkpoints.contains("grid_integrity: pass"));
    }

    // Tests animation prints one frame per generation
    #[test]
    fn test_animation_output() {
        let output = run_to_string("latticeart -q -W 12 -H 6 --position 5 -a 3 -d 0");
        assert_eq!(output.matches("Generation: ").count(), 3);
        assert!(output.contains("Generation: 3/3 | Active: "));
        assert!(!output.contains("Creation #"));
    }

    // Tests a zero dimension fails before any output
    #[test]
    fn test_invalid_dimensions_rejected() {
        let cli = Cli::parse_from(["latticeart", "-q", "-W", "0"]);
        assert!(ArtRunner::new(cli, Vec::new()).is_err());
    }

    // Tests the creation header and separators
    #[test]
    fn test_write_creation_format() {
        let rows = [vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]];
        let lattice = Lattice::from_rows(&rows).expect("lattice");
        let creation = Creation {
            number: 4,
            steps: 21,
            sequence_position: 333,
            perturbed_steps: 0,
            art: SymbolRenderer::default().render(&lattice),
        };
        let mut out = Vec::new();
        write_creation(&mut out, &creation, false).expect("write");

        let separator = "=".repeat(80);
        let expected = format!(
            "Creation #4 | Evolution Steps: 21 | Sequence Position: 333\n{separator}\n\n╺━╸\n\n{separator}\n"
        );
        assert_eq!(String::from_utf8(out).expect("utf-8"), expected);
    }

    // Tests output is unchanged when written around a progress display
    #[test]
    fn test_run_with_hidden_progress() {
        let command_line = "latticeart -W 10 -H 5 --position 9 -s 4 -n 2";
        let cli = Cli::parse_from(command_line.split_whitespace());
        let mut runner = ArtRunner::new(cli, Vec::new())
            .expect("runner")
            .with_progress(Some(ProgressManager::hidden()));
        runner.run().expect("run");
        assert_eq!(runner.session().creation_count(), 2);

        let with_progress = String::from_utf8(runner.into_output()).expect("utf-8 output");
        let quiet = run_to_string(&format!("{command_line} -q"));
        assert_eq!(with_progress, quiet);
    }

    // Tests installing the subscriber twice keeps the first
    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing(Level::WARN);
        init_tracing(Level::DEBUG);
    }
}
