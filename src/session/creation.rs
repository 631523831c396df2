//! Session orchestration: seed, evolve, render
//!
//! Each creation starts from a blank lattice. The digit cursor is the only
//! state carried from one creation to the next, so a session started at a
//! known cursor position replays exactly.

use tracing::info;

use crate::automaton::engine::{AutomatonEngine, StepOutcome, derive_steps};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_PRECISION, DEFAULT_WIDTH};
use crate::io::error::{Result, require_positive};
use crate::render::classic::render_classic;
use crate::render::color::ColorMode;
use crate::render::renderer::{RenderStyle, RenderedArt, SymbolRenderer};
use crate::sequence::digits::DigitSource;
use crate::spatial::lattice::Lattice;

/// Session parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Digits computed for the digit source
    pub precision: usize,
    /// Lattice width in cells
    pub width: usize,
    /// Lattice height in cells
    pub height: usize,
    /// Colour capability for pathway glyphs
    pub color: ColorMode,
    /// Glyph vocabulary
    pub style: RenderStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: ColorMode::Off,
            style: RenderStyle::Pathway,
        }
    }
}

/// One finished piece of art with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Creation {
    /// 1-based index within the session
    pub number: usize,
    /// Generations evolved
    pub steps: usize,
    /// Digit cursor after the creation finished
    pub sequence_position: usize,
    /// Generations on which perturbation fired
    pub perturbed_steps: usize,
    /// Rendered output and metrics
    pub art: RenderedArt,
}

/// One generation of a live evolution
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Generation number (1-based)
    pub generation: usize,
    /// Active cells in this generation
    pub active_cells: usize,
    /// Rendering of this generation
    pub art: RenderedArt,
}

/// Produces independent creations from one advancing digit stream
#[derive(Debug, Clone)]
pub struct PatternSession {
    config: SessionConfig,
    digits: DigitSource,
    blank: Lattice,
    creation_count: usize,
}

impl PatternSession {
    /// Build a session with a wall-clock cursor
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero precision, width or height, or
    /// an error from the digit expansion
    pub fn new(config: SessionConfig) -> Result<Self> {
        require_positive("width", config.width)?;
        require_positive("height", config.height)?;
        let digits = DigitSource::new(config.precision)?;
        Self::with_digit_source(config, digits)
    }

    /// Build a session around an injected digit source
    ///
    /// `config.precision` is ignored in favour of the source's own buffer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero width or height
    pub fn with_digit_source(config: SessionConfig, digits: DigitSource) -> Result<Self> {
        let blank = Lattice::new(config.height, config.width)?;
        Ok(Self {
            config,
            digits,
            blank,
            creation_count: 0,
        })
    }

    /// Produce one creation
    ///
    /// With `steps` of `None` the depth is drawn from the digit stream.
    pub fn create(&mut self, steps: Option<usize>) -> Creation {
        self.create_with_observer(steps, |_| {})
    }

    /// Produce one creation, reporting every evolution step
    pub fn create_with_observer(
        &mut self,
        steps: Option<usize>,
        mut observer: impl FnMut(&StepOutcome),
    ) -> Creation {
        let steps = self.resolve_steps(steps);

        let mut engine = AutomatonEngine::new(self.blank.clone());
        engine.seed(&mut self.digits);
        engine.run_observed(steps, &mut self.digits, |outcome, _| observer(outcome));

        let art = render_art(&self.config, engine.lattice(), &mut self.digits);
        self.creation_count += 1;

        let creation = Creation {
            number: self.creation_count,
            steps,
            sequence_position: self.digits.position(),
            perturbed_steps: engine.perturbed_steps(),
            art,
        };
        info!(
            creation = creation.number,
            steps,
            sequence_position = creation.sequence_position,
            active_cells = creation.art.metrics.active_cells,
            "creation finished"
        );
        creation
    }

    /// Seed a fresh lattice and render each of `generations` evolved generations
    pub fn animate(&mut self, generations: usize) -> Vec<Frame> {
        let mut engine = AutomatonEngine::new(self.blank.clone());
        engine.seed(&mut self.digits);

        let mut frames = Vec::with_capacity(generations);
        for _ in 0..generations {
            let outcome = engine.evolve_step(&mut self.digits);
            frames.push(Frame {
                generation: outcome.generation,
                active_cells: outcome.active_cells,
                art: render_art(&self.config, engine.lattice(), &mut self.digits),
            });
        }
        engine.finish();
        self.creation_count += 1;

        info!(
            creation = self.creation_count,
            generations,
            sequence_position = self.digits.position(),
            "animation finished"
        );
        frames
    }

    /// Use the given depth or draw one from the digit stream
    pub fn resolve_steps(&mut self, steps: Option<usize>) -> usize {
        steps.unwrap_or_else(|| derive_steps(&mut self.digits))
    }

    /// Creations produced so far
    pub const fn creation_count(&self) -> usize {
        self.creation_count
    }

    /// Session parameters
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The session's digit source
    pub const fn digits(&self) -> &DigitSource {
        &self.digits
    }
}

/// Produce one pathway rendering with a fresh wall-clock-seeded digit source
///
/// With `steps` of `None` the depth is drawn from the digit stream.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero precision, width or height, or an
/// error from the digit expansion
pub fn create_pattern(
    precision: usize,
    width: usize,
    height: usize,
    steps: Option<usize>,
) -> Result<RenderedArt> {
    require_positive("width", width)?;
    require_positive("height", height)?;
    let mut digits = DigitSource::new(precision)?;
    create_pattern_with(&mut digits, width, height, steps)
}

/// Produce one pathway rendering from an injected digit source
///
/// Identical sources in identical states give byte-identical results.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero width or height
pub fn create_pattern_with(
    digits: &mut DigitSource,
    width: usize,
    height: usize,
    steps: Option<usize>,
) -> Result<RenderedArt> {
    let lattice = Lattice::new(height, width)?;
    let steps = steps.unwrap_or_else(|| derive_steps(digits));

    let mut engine = AutomatonEngine::new(lattice);
    engine.seed(digits);
    engine.run(steps, digits);

    Ok(SymbolRenderer::default().render(engine.lattice()))
}

fn render_art(config: &SessionConfig, lattice: &Lattice, digits: &mut DigitSource) -> RenderedArt {
    match config.style {
        RenderStyle::Pathway => SymbolRenderer::new(config.color).render(lattice),
        RenderStyle::Classic => render_classic(lattice, digits),
    }
}
