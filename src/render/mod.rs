//! Lattice-to-glyph rendering

/// Digit-driven shade glyph style
pub mod classic;
/// Density-keyed ANSI colour annotation
pub mod color;
/// Dilation of sparse grids before encoding
pub mod morphology;
/// Rendering entry point and rendered output
pub mod renderer;
/// Neighborhood bit-vectors and the glyph table
pub mod symbols;

pub use color::ColorMode;
pub use renderer::{RenderStyle, RenderedArt, SymbolRenderer};
pub use symbols::Glyph;
