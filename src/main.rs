//! CLI entry point for the digit-seeded lattice art generator

use clap::Parser;
use latticeart::io::cli::{ArtRunner, Cli, init_tracing};

fn main() -> latticeart::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    let mut runner = ArtRunner::new(cli, std::io::stdout().lock())?;
    runner.run()
}
