//! Spatial data structures for the cell grid
//!
//! This module contains spatial-related functionality including:
//! - The binary lattice with toroidal and planar neighbor queries
//! - The bounded ring of generation snapshots used to detect stagnation

/// Bounded snapshot history and stagnation detection
pub mod history;
/// Binary cell grid with wrap-around topology
pub mod lattice;

pub use history::GenerationHistory;
pub use lattice::Lattice;
