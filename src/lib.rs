//! Non-repeating cellular automaton art driven by a high-precision digit stream
//!
//! Digits of a Machin-formula series seed and perturb a toroidal Game of Life
//! lattice; the final state is rendered as connectivity glyphs and annotated
//! with topological metrics. Every result is reproducible from the digit
//! cursor it started at.

#![forbid(unsafe_code)]

/// Connected components, pathway tracing, entropy and validation checkpoints
pub mod analysis;
/// Cellular automaton rules and the evolution engine
pub mod automaton;
/// Command-line interface, configuration, progress and error handling
pub mod io;
/// Glyph encoding, enhancement, colour and rendering
pub mod render;
/// Deterministic digit source and series expansion
pub mod sequence;
/// Session orchestration from seed to rendered art
pub mod session;
/// Lattice and generation history
pub mod spatial;

pub use io::error::{PatternError, Result};
pub use render::renderer::RenderedArt;
pub use session::creation::{PatternSession, create_pattern, create_pattern_with};
