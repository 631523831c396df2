//! Final validation checks applied to a rendered creation

use std::fmt;

use crate::analysis::metrics::NetworkMetrics;
use crate::io::configuration::{MIN_CHECKPOINT_DENSITY, MIN_CHECKPOINT_ENTROPY};

/// The four named checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// At least one pathway exists
    PathwayContinuity,
    /// Active ratio reaches the minimum density
    MinimumDensity,
    /// Component counts agree with the number of active cells
    GridIntegrity,
    /// Entropy reaches the minimum
    SymbolEntropy,
}

impl Checkpoint {
    /// Every checkpoint in reporting order
    pub const ALL: [Self; 4] = [
        Self::PathwayContinuity,
        Self::MinimumDensity,
        Self::GridIntegrity,
        Self::SymbolEntropy,
    ];

    /// Stable snake_case name
    pub const fn name(self) -> &'static str {
        match self {
            Self::PathwayContinuity => "pathway_continuity",
            Self::MinimumDensity => "minimum_density",
            Self::GridIntegrity => "grid_integrity",
            Self::SymbolEntropy => "symbol_entropy",
        }
    }

    /// Evaluate this check
    pub fn passes(self, metrics: &NetworkMetrics) -> bool {
        match self {
            Self::PathwayContinuity => metrics.pathway_count > 0,
            Self::MinimumDensity => metrics.active_ratio >= MIN_CHECKPOINT_DENSITY,
            Self::GridIntegrity => {
                metrics.largest_cluster <= metrics.active_cells
                    && metrics.cluster_count <= metrics.active_cells
                    && metrics.pathway_count <= metrics.cluster_count
                    && (metrics.active_cells == 0) == (metrics.cluster_count == 0)
            }
            Self::SymbolEntropy => metrics.entropy >= MIN_CHECKPOINT_ENTROPY,
        }
    }
}

/// Outcome of one checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointResult {
    /// Which check ran
    pub checkpoint: Checkpoint,
    /// Whether it passed
    pub passed: bool,
}

impl fmt::Display for CheckpointResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "pass" } else { "FAIL" };
        write!(f, "{}: {mark}", self.checkpoint.name())
    }
}

/// Run every checkpoint in order
pub fn run_checkpoints(metrics: &NetworkMetrics) -> [CheckpointResult; 4] {
    Checkpoint::ALL.map(|checkpoint| CheckpointResult {
        checkpoint,
        passed: checkpoint.passes(metrics),
    })
}

/// Whether every result passed
pub fn all_passed(results: &[CheckpointResult]) -> bool {
    results.iter().all(|result| result.passed)
}
