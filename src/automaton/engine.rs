//! Automaton lifecycle: seed, evolve generation by generation, finish
//!
//! The engine owns its lattice exclusively. Each step computes the complete
//! next generation before swapping it in, so a reader never observes a
//! partially updated grid. The digit source is borrowed per call; it is the
//! only input shared with the caller.

use tracing::{debug, trace};

use crate::automaton::rules::{apply_perturbation, base_generation};
use crate::io::configuration::{
    CLUSTER_GATE, DERIVED_STEPS_BASE, DERIVED_STEPS_SPAN, PERTURBATION_DIGITS, PERTURBATION_RATE,
    SEED_DIGITS,
};
use crate::sequence::digits::DigitSource;
use crate::spatial::history::GenerationHistory;
use crate::spatial::lattice::Lattice;

/// Lifecycle position of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No seed clusters placed yet
    Unseeded,
    /// Seed clusters placed, no generation evolved
    Seeded,
    /// At least one generation evolved
    Evolving,
    /// A bounded run has completed
    Done,
}

/// What happened during one evolution step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Generation number after the step (1-based)
    pub generation: usize,
    /// Whether the pre-step grid matched a recent snapshot
    pub stagnant: bool,
    /// Cells flipped by the perturbation filter
    pub flipped: usize,
    /// Active cells after the step
    pub active_cells: usize,
}

/// Evolves one lattice with the base rule plus stagnation-triggered perturbation
#[derive(Debug, Clone)]
pub struct AutomatonEngine {
    lattice: Lattice,
    history: GenerationHistory,
    state: EngineState,
    generation: usize,
    perturbed_steps: usize,
}

impl AutomatonEngine {
    /// Take ownership of a lattice, usually a blank one awaiting `seed`
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            history: GenerationHistory::default(),
            state: EngineState::Unseeded,
            generation: 0,
            perturbed_steps: 0,
        }
    }

    /// Place 8 gated 3x3 clusters at digit-derived positions
    ///
    /// Draws 16 digits. Pair `(a, b)` at index `i` gives the centre
    /// `x = (10a + b) mod width`, `y = (7a + 3b) mod height`; each cell at
    /// offset `(dx, dy)` turns on only if digit `(i + dx + dy) mod 16`
    /// exceeds 5. Seeding after evolution overlays new clusters on the
    /// current grid.
    pub fn seed(&mut self, digits: &mut DigitSource) {
        let values = digits.next(SEED_DIGITS);
        let (height, width) = self.lattice.dimensions();
        let len = values.len() as isize;

        for i in (0..values.len().saturating_sub(1)).step_by(2) {
            let (Some(&a), Some(&b)) = (values.get(i), values.get(i + 1)) else {
                continue;
            };
            let x = (usize::from(a) * 10 + usize::from(b)) % width;
            let y = (usize::from(a) * 7 + usize::from(b) * 3) % height;

            for dx in -1..=1 {
                for dy in -1..=1 {
                    let gate = (i as isize + dx + dy).rem_euclid(len) as usize;
                    if values.get(gate).is_some_and(|&digit| digit > CLUSTER_GATE) {
                        let (row, col) = (y as isize + dy, x as isize + dx);
                        self.lattice.activate_wrapped(row, col);
                    }
                }
            }
        }

        self.state = EngineState::Seeded;
        debug!(
            active_cells = self.lattice.active_count(),
            "seed clusters placed"
        );
    }

    /// Advance one generation
    ///
    /// Eight perturbation digits are drawn on every step. They are applied
    /// only when the current grid equals one of the two latest snapshots.
    pub fn evolve_step(&mut self, digits: &mut DigitSource) -> StepOutcome {
        let perturbation = digits.next(PERTURBATION_DIGITS);
        let stagnant = self.history.is_stagnant(&self.lattice);

        let base = base_generation(&self.lattice);
        let (next, flipped) = if stagnant {
            apply_perturbation(&base, &perturbation, PERTURBATION_RATE)
        } else {
            (base, 0)
        };

        let previous = std::mem::replace(&mut self.lattice, next);
        self.history.push(previous);
        self.generation += 1;
        self.state = EngineState::Evolving;

        if stagnant {
            self.perturbed_steps += 1;
            debug!(
                generation = self.generation,
                flipped, "stagnation detected, perturbation applied"
            );
        }

        let outcome = StepOutcome {
            generation: self.generation,
            stagnant,
            flipped,
            active_cells: self.lattice.active_count(),
        };
        trace!(
            generation = outcome.generation,
            active_cells = outcome.active_cells,
            "generation evolved"
        );
        outcome
    }

    /// Evolve exactly `steps` generations, then mark the run done
    pub fn run(&mut self, steps: usize, digits: &mut DigitSource) {
        self.run_observed(steps, digits, |_, _| {});
    }

    /// Evolve exactly `steps` generations, reporting each step to `observer`
    pub fn run_observed(
        &mut self,
        steps: usize,
        digits: &mut DigitSource,
        mut observer: impl FnMut(&StepOutcome, &Lattice),
    ) {
        for _ in 0..steps {
            let outcome = self.evolve_step(digits);
            observer(&outcome, &self.lattice);
        }
        self.finish();
    }

    /// Mark the engine done without evolving further
    pub const fn finish(&mut self) {
        self.state = EngineState::Done;
    }

    /// Current lattice
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Release the lattice
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Current lifecycle state
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Generations evolved so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Steps on which perturbation was applied
    pub const fn perturbed_steps(&self) -> usize {
        self.perturbed_steps
    }

    /// Snapshot history used for stagnation detection
    pub const fn history(&self) -> &GenerationHistory {
        &self.history
    }
}

/// Evolution depth drawn from two digits: `20 + (d0 * d1) mod 40`, in `[20, 59]`
pub fn derive_steps(digits: &mut DigitSource) -> usize {
    let values = digits.next(2);
    let product: usize = values.iter().map(|&digit| usize::from(digit)).product();
    DERIVED_STEPS_BASE + product % DERIVED_STEPS_SPAN
}
