//! Command-line interface for generating and printing creations

use crate::analysis::checkpoints::run_checkpoints;
use crate::io::configuration::{
    DEFAULT_CREATION_COUNT, DEFAULT_FRAME_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_PRECISION,
    DEFAULT_WIDTH, SEPARATOR_WIDTH,
};
use crate::io::error::{PatternError, Result};
use crate::io::progress::ProgressManager;
use crate::render::color::ColorMode;
use crate::render::renderer::{RenderStyle, RenderedArt};
use crate::sequence::digits::DigitSource;
use crate::session::creation::{Creation, Frame, PatternSession, SessionConfig};
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "latticeart")]
#[command(
    author,
    version,
    about = "Generate cellular automaton art seeded by a non-repeating digit stream"
)]
/// Command-line arguments for the art generator
pub struct Cli {
    /// Digits of the series expansion to compute
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Lattice width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Lattice height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Evolution steps per creation (drawn from the digit stream if omitted)
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Starting digit cursor for reproducible output (wall clock if omitted)
    #[arg(long)]
    pub position: Option<usize>,

    /// Number of creations to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_CREATION_COUNT)]
    pub count: usize,

    /// Glyph vocabulary
    #[arg(long, value_enum, default_value_t = RenderStyle::Pathway)]
    pub style: RenderStyle,

    /// Terminal colour capability
    #[arg(long, value_enum, default_value_t = ColorMode::Off)]
    pub color: ColorMode,

    /// Print every generation of a live evolution of this many generations
    #[arg(short, long)]
    pub animate: Option<usize>,

    /// Delay between animation frames in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay: u64,

    /// Print network metrics and validation checkpoints
    #[arg(short, long)]
    pub metrics: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the flags
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Session parameters implied by the flags
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            precision: self.precision,
            width: self.width,
            height: self.height,
            color: self.color,
            style: self.style,
        }
    }

    /// Build the session, pinning the cursor when `--position` is given
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension or the precision is zero
    pub fn build_session(&self) -> Result<PatternSession> {
        let config = self.session_config();
        match self.position {
            Some(position) => {
                let digits = DigitSource::with_position(config.precision, position)?;
                PatternSession::with_digit_source(config, digits)
            }
            None => PatternSession::new(config),
        }
    }
}

/// Install the compact stderr log subscriber
pub fn init_tracing(level: Level) {
    // A subscriber may already be installed when embedded; keep the existing one
    let _ = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Drives a session according to CLI arguments and writes the art to `out`
pub struct ArtRunner<W: Write> {
    cli: Cli,
    session: PatternSession,
    progress_manager: Option<ProgressManager>,
    out: W,
}

impl<W: Write> ArtRunner<W> {
    /// Create a runner writing to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built from the arguments
    pub fn new(cli: Cli, out: W) -> Result<Self> {
        let session = cli.build_session()?;
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            session,
            progress_manager,
            out,
        })
    }

    /// Replace the progress display
    #[must_use]
    pub fn with_progress(mut self, progress_manager: Option<ProgressManager>) -> Self {
        self.progress_manager = progress_manager;
        self
    }

    /// Generate everything the arguments ask for
    ///
    /// # Errors
    ///
    /// Returns `Output` if writing to the output stream fails
    pub fn run(&mut self) -> Result<()> {
        if let Some(generations) = self.cli.animate {
            return self.run_animation(generations);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for _ in 0..self.cli.count {
            let creation = self.next_creation();
            match self.progress_manager {
                Some(ref pm) => {
                    let metrics = self.cli.metrics;
                    let out = &mut self.out;
                    pm.suspend(|| write_creation(out, &creation, metrics))?;
                    pm.complete_creation();
                }
                None => write_creation(&mut self.out, &creation, self.cli.metrics)?,
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        self.out.flush().map_err(|source| PatternError::Output {
            operation: "flush",
            source,
        })
    }

    /// The driven session
    pub const fn session(&self) -> &PatternSession {
        &self.session
    }

    /// Release the output stream
    pub fn into_output(self) -> W {
        self.out
    }

    fn next_creation(&mut self) -> Creation {
        let steps = self.session.resolve_steps(self.cli.steps);
        let number = self.session.creation_count() + 1;

        match self.progress_manager {
            Some(ref pm) => {
                pm.start_creation(number, steps);
                self.session.create_with_observer(Some(steps), |outcome| {
                    pm.update_generation(outcome.generation);
                })
            }
            None => self.session.create(Some(steps)),
        }
    }

    fn run_animation(&mut self, generations: usize) -> Result<()> {
        let frames = self.session.animate(generations);
        let delay = Duration::from_millis(self.cli.delay);

        for (index, frame) in frames.iter().enumerate() {
            write_frame(&mut self.out, frame, generations, self.cli.metrics)?;
            self.out.flush()?;
            if index + 1 < frames.len() && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
        Ok(())
    }
}

/// Write one creation with its header
///
/// # Errors
///
/// Returns `Output` if writing fails
pub fn write_creation(out: &mut impl Write, creation: &Creation, metrics: bool) -> Result<()> {
    writeln!(
        out,
        "Creation #{} | Evolution Steps: {} | Sequence Position: {}",
        creation.number, creation.steps, creation.sequence_position
    )?;
    write_art(out, &creation.art, metrics)
}

/// Write one animation frame with its header
///
/// # Errors
///
/// Returns `Output` if writing fails
pub fn write_frame(out: &mut impl Write, frame: &Frame, total: usize, metrics: bool) -> Result<()> {
    writeln!(
        out,
        "Generation: {}/{total} | Active: {}",
        frame.generation, frame.active_cells
    )?;
    write_art(out, &frame.art, metrics)
}

fn write_art(out: &mut impl Write, art: &RenderedArt, metrics: bool) -> Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(out, "{separator}")?;
    for line in &art.glyph_lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{separator}")?;

    if metrics {
        writeln!(out, "{}", art.metrics)?;
        let checkpoints = run_checkpoints(&art.metrics)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "Checkpoints: {checkpoints}")?;
    }
    Ok(())
}
