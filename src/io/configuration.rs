//! Algorithm constants and runtime configuration defaults

// Digit sequence settings
/// Number of fractional digits computed when no precision is given
pub const DEFAULT_PRECISION: usize = 500;
/// Extra digits carried through the series to absorb truncation error
pub const SERIES_GUARD_DIGITS: usize = 10;
/// Upper bound on series terms, per digit of working precision
pub const SERIES_TERMS_PER_DIGIT: usize = 2;
/// Fixed allowance of series terms added on top of the per-digit bound
pub const SERIES_TERMS_SLACK: usize = 64;

// Lattice dimensions
/// Default lattice width in cells
pub const DEFAULT_WIDTH: usize = 80;
/// Default lattice height in cells
pub const DEFAULT_HEIGHT: usize = 24;

// Seeding
/// Digits drawn to place the initial seed clusters
pub const SEED_DIGITS: usize = 16;
/// Cluster cells activate only where the gating digit exceeds this value
pub const CLUSTER_GATE: u8 = 5;

// Evolution
/// Probability-like cutoff below which a digit flips a cell during stagnation
pub const PERTURBATION_RATE: f64 = 0.08;
/// Digits drawn per evolution step for the perturbation filter
pub const PERTURBATION_DIGITS: usize = 8;
/// Snapshots kept for stagnation detection
pub const HISTORY_CAPACITY: usize = 5;
/// How many of the most recent snapshots are compared against the current grid
pub const STAGNATION_LOOKBACK: usize = 2;
/// Minimum number of steps when the step count is derived from digits
pub const DERIVED_STEPS_BASE: usize = 20;
/// Range of the digit-derived step count above the base
pub const DERIVED_STEPS_SPAN: usize = 40;

// Topology
/// Smallest component that counts as a pathway
pub const MIN_PATHWAY_LENGTH: usize = 3;

// Rendering
/// Grids below this active density are dilated before encoding
pub const SPARSE_DENSITY_THRESHOLD: f64 = 0.12;
/// Local density below which glyphs use the low colour
pub const LOW_DENSITY_CUTOFF: f64 = 0.3;
/// Local density below which glyphs use the medium colour
pub const MEDIUM_DENSITY_CUTOFF: f64 = 0.7;
/// 256-colour code for sparse neighborhoods (deep blue)
pub const LOW_DENSITY_COLOR: u8 = 21;
/// 256-colour code for medium neighborhoods (orange)
pub const MEDIUM_DENSITY_COLOR: u8 = 202;
/// 256-colour code for dense neighborhoods (red)
pub const HIGH_DENSITY_COLOR: u8 = 196;
/// Shade glyphs for the classic style, indexed by digit
pub const VISUAL_CHARS: [char; 9] = [' ', '░', '▒', '▓', '█', '◆', '●', '♦', '★'];

// Validation checkpoints
/// Minimum active ratio for the density checkpoint
pub const MIN_CHECKPOINT_DENSITY: f64 = 0.05;
/// Minimum entropy for the entropy checkpoint
pub const MIN_CHECKPOINT_ENTROPY: f64 = 0.1;

// Command-line defaults
/// Creations produced per invocation
pub const DEFAULT_CREATION_COUNT: usize = 1;
/// Delay between animation frames in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u64 = 500;
/// Width of the separator line printed around art
pub const SEPARATOR_WIDTH: usize = 80;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
