//! Rendering pipeline: enhance, encode, look up, validate, colour
//!
//! Metrics always describe the lattice as passed in; dilation only affects
//! the working copy the glyphs are drawn from.

use std::fmt;

use clap::ValueEnum;

use crate::analysis::metrics::{NetworkMetrics, analyze};
use crate::render::color::{ColorMode, colorize};
use crate::render::morphology::enhance;
use crate::render::symbols::{Glyph, select_glyph};
use crate::spatial::lattice::Lattice;

/// Which glyph vocabulary a session draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderStyle {
    /// Connectivity glyphs from neighborhood encoding
    #[default]
    Pathway,
    /// Digit-chosen shade glyphs
    Classic,
}

/// Rendered rows plus the metrics of the source lattice
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArt {
    /// One display string per lattice row, right-trimmed
    pub glyph_lines: Vec<String>,
    /// Topological metrics of the pre-enhancement lattice
    pub metrics: NetworkMetrics,
}

impl RenderedArt {
    /// Rows joined with newlines
    pub fn to_text(&self) -> String {
        self.glyph_lines.join("\n")
    }
}

impl fmt::Display for RenderedArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Maps lattices to connectivity glyphs
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolRenderer {
    color: ColorMode,
}

impl SymbolRenderer {
    /// Renderer emitting colour according to `color`
    pub const fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Colour mode in use
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Render a lattice
    pub fn render(&self, lattice: &Lattice) -> RenderedArt {
        let metrics = analyze(lattice);
        let working = enhance(lattice);
        let glyph_lines = (0..working.height())
            .map(|row| self.render_row(&working, row))
            .collect();

        RenderedArt {
            glyph_lines,
            metrics,
        }
    }

    /// Glyphs of one row before colouring and trimming
    pub fn row_glyphs(lattice: &Lattice, row: usize) -> Vec<Glyph> {
        (0..lattice.width())
            .map(|col| {
                if lattice.is_active(row, col) {
                    select_glyph(lattice, row, col)
                } else {
                    Glyph::Blank
                }
            })
            .collect()
    }

    fn render_row(&self, lattice: &Lattice, row: usize) -> String {
        let glyphs = Self::row_glyphs(lattice, row);
        let visible = glyphs
            .iter()
            .rposition(|&glyph| glyph != Glyph::Blank)
            .map_or(0, |last| last + 1);

        let mut line = String::new();
        for (col, glyph) in glyphs.iter().take(visible).enumerate() {
            if *glyph == Glyph::Blank {
                line.push(' ');
            } else {
                let density = lattice.planar_neighbor_count(row, col) as f64 / 8.0;
                line.push_str(&colorize(glyph.symbol(), density, self.color));
            }
        }
        line
    }
}
