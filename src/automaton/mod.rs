//! Cellular automaton evolution with digit-driven perturbation

/// Seeding, stepping and the engine lifecycle
pub mod engine;
/// Two-state neighbor-count rule and the perturbation filter
pub mod rules;

pub use engine::{AutomatonEngine, EngineState, StepOutcome};
